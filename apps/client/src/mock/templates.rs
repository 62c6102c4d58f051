//! Canned response bodies for demo mode, one per tool category.
//!
//! These are product copy carried verbatim; keep them markdown-formatted
//! the way the result pane renders them.

pub const CODE_GENERATION: &str = r#"# Generated Code

Here's a complete solution for your request:

```java
public class NumberPrinter {
    public static void main(String[] args) {
        // Print numbers from 1 to 10
        for (int i = 1; i <= 10; i++) {
            System.out.println(i);
        }
    }
}
```

## Explanation
This Java program uses a for loop to iterate from 1 to 10 and prints each number on a new line.

## How to Run
1. Save the file as `NumberPrinter.java`
2. Compile: `javac NumberPrinter.java`
3. Run: `java NumberPrinter`

## Output
```
1
2
3
4
5
6
7
8
9
10
```"#;

pub const EXPLANATION: &str = r#"# Code Explanation

## Overview
This code demonstrates a fundamental programming concept using a loop structure.

## Step-by-Step Breakdown

### 1. Loop Initialization
The code starts by setting up a loop counter variable.

### 2. Condition Check
On each iteration, the loop checks if the counter has reached the target value.

### 3. Execution
The loop body executes the desired operation (in this case, printing or processing values).

### 4. Increment
After each iteration, the counter is incremented to move toward the exit condition.

## Key Concepts
- **Iteration**: Repeating a set of instructions
- **Counter Variable**: Tracks the current iteration
- **Condition**: Determines when to stop looping

## Use Cases
This pattern is commonly used for:
- Processing arrays or lists
- Generating sequences
- Repeating operations a specific number of times"#;

pub const BUG_REPORT: &str = r#"# Bug Detection Report

## Issues Found: 2

### 🔴 Issue 1: Potential Null Pointer Exception
**Severity**: High
**Line**: Variable access without null check
**Fix**: Add null validation before accessing object properties

```java
// Before
obj.method();

// After
if (obj != null) {
    obj.method();
}
```

### 🟡 Issue 2: Inefficient Loop
**Severity**: Medium
**Line**: Loop could be optimized
**Fix**: Use enhanced for-loop or stream API for better performance

## Recommendations
1. Add input validation
2. Implement error handling
3. Consider edge cases"#;

pub const CONVERSION: &str = r#"# Code Conversion

## Original Code (Java)
```java
for(int i=0; i<10; i++) {
    System.out.println(i);
}
```

## Converted Code (Python)
```python
for i in range(10):
    print(i)
```

## Key Differences
- Python uses `range()` instead of traditional for loop syntax
- No need for semicolons in Python
- Python uses indentation instead of braces
- `print()` function instead of `System.out.println()`"#;

pub const DOCUMENTATION: &str = r#"# Code Documentation

## Function Overview
This function performs a specific operation as part of the application's core functionality.

## Parameters
- **param1** (type): Description of the first parameter
- **param2** (type): Description of the second parameter

## Returns
- **type**: Description of the return value

## Example Usage
```java
result = functionName(arg1, arg2);
```

## Notes
- This function is thread-safe
- Handles edge cases appropriately
- Throws exceptions for invalid input"#;

pub const REFACTORING: &str = r#"# Code Refactoring Suggestions

## Original Code
```java
// Original implementation
public void processData() {
    // Complex nested logic
}
```

## Refactored Code
```java
// Improved implementation
public void processData() {
    validateInput();
    transformData();
    saveResults();
}

private void validateInput() {
    // Validation logic
}

private void transformData() {
    // Transformation logic
}

private void saveResults() {
    // Save logic
}
```

## Improvements
1. **Single Responsibility**: Each method has one clear purpose
2. **Readability**: Code is easier to understand
3. **Maintainability**: Changes are isolated to specific methods
4. **Testability**: Individual methods can be tested separately"#;

pub const COMPLETION: &str = r#"# Code Completion Suggestion

## Completed Code
```java
public class DataProcessor {
    private List<String> data;

    public DataProcessor() {
        this.data = new ArrayList<>();
    }

    public void addData(String item) {
        if (item != null && !item.isEmpty()) {
            data.add(item);
        }
    }

    public void processAll() {
        for (String item : data) {
            System.out.println("Processing: " + item);
        }
    }

    public int getCount() {
        return data.size();
    }
}
```

## Added Features
- Constructor initialization
- Input validation
- Processing method
- Getter for data count"#;

pub const GENERIC: &str = r#"# AI-Generated Response

Thank you for using CodeCraft! Here's a comprehensive response to your request:

## Analysis
The request has been processed and analyzed for the best possible solution.

## Solution
```java
// Sample implementation
public class Solution {
    public static void main(String[] args) {
        System.out.println("Hello from CodeCraft!");
        // Your code implementation here
    }
}
```

## Explanation
This is a demonstration response showing how the AI-powered tools work in CodeCraft.

## Next Steps
1. Review the generated code
2. Test in your environment
3. Customize as needed

**Note**: This is a demo response. For production use, configure your Gemini API key in the .env file."#;
