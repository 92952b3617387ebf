//! Statement simulation
//!
//! This module handles every line kind except loop headers:
//!
//! - Declarations and plain assignments (the only writes to the environment)
//! - Output calls, appended to the console
//! - Conditionals, which only log whether the branch would be taken
//! - Function definitions, returns, calls, and anything else, which only log
//!
//! # Implementation
//!
//! All handlers are `pub(crate)` methods on [`Engine`]. Statement text is
//! cut at its first top-level `;` or `//` before any fragment reaches the
//! evaluator. Control never branches: every eligible line runs exactly once,
//! in source order.

use crate::interpreter::engine::Engine;
use crate::interpreter::errors::StepError;
use crate::interpreter::expressions::evaluate;
use crate::memory::value::Value;
use crate::parser::classify::{
    assignment_parts, call_name, declaration_keyword, function_name, output_arguments,
    return_expression, strip_closing_braces,
};
use crate::parser::scan::{
    cut_statement, first_paren_group, is_identifier, split_top_level, strip_keyword,
};
use crate::parser::ClassifiedLine;
use crate::snapshot::HistoryKind;

impl Engine {
    pub(crate) fn execute_declaration(&mut self, line: &ClassifiedLine) -> Result<(), StepError> {
        let text = cut_statement(&line.text);
        let Some((keyword, rest)) = declaration_keyword(text) else {
            return self.execute_other(line);
        };
        let rest = rest.trim();

        let (name, value) = if let Some((name, rhs)) = assignment_parts(rest) {
            (name, evaluate(rhs, &self.state.environment))
        } else if is_identifier(rest) {
            // `let x;`
            (rest, Value::Undefined)
        } else {
            // Destructuring and other shapes are inert
            return self.execute_other(line);
        };

        let description = format!("Set {} = {}", name, value.repr());
        self.write_binding(name, value, keyword == "const");
        self.state
            .history
            .record(line.line_number, HistoryKind::Assignment, description);
        Ok(())
    }

    pub(crate) fn execute_assignment(&mut self, line: &ClassifiedLine) -> Result<(), StepError> {
        let text = cut_statement(&line.text);
        let Some((name, rhs)) = assignment_parts(text) else {
            return self.execute_other(line);
        };

        if self.state.environment.is_constant(name) {
            return Err(StepError::ConstReassignment {
                name: name.to_string(),
                line: line.line_number,
            });
        }

        let old = self
            .state
            .environment
            .value_of(name)
            .cloned()
            .unwrap_or_default();
        let value = evaluate(rhs, &self.state.environment);

        let description = format!("{}: {} → {}", name, old, value);
        self.write_binding(name, value, false);
        self.state
            .history
            .record(line.line_number, HistoryKind::Assignment, description);
        Ok(())
    }

    /// Write a binding and feed numeric values to the loop trackers
    fn write_binding(&mut self, name: &str, value: Value, constant: bool) {
        if let Some(n) = value.as_number() {
            self.state.loops.observe(name, n);
        }
        self.state.environment.set(name, value, constant);
    }

    pub(crate) fn execute_output(&mut self, line: &ClassifiedLine) -> Result<(), StepError> {
        let Some(arguments) = output_arguments(&line.text) else {
            return self.execute_other(line);
        };

        let env = &self.state.environment;
        let text = split_top_level(arguments, ',')
            .into_iter()
            .map(|argument| evaluate(argument, env).to_string())
            .collect::<Vec<_>>()
            .join(" ");

        let description = format!("Output: {}", text);
        self.state.console.print(text);
        self.state
            .history
            .record(line.line_number, HistoryKind::Output, description);
        Ok(())
    }

    pub(crate) fn execute_conditional(&mut self, line: &ClassifiedLine) -> Result<(), StepError> {
        let text = strip_closing_braces(&line.text);
        let text = strip_keyword(text, "else").map_or(text, str::trim_start);

        let condition = strip_keyword(text, "if").and_then(first_paren_group);
        let description = match condition {
            Some(condition) if evaluate(condition, &self.state.environment).is_truthy() => {
                "Condition: ✓ true"
            }
            Some(_) => "Condition: ✗ false",
            None => "Else branch",
        };

        self.state
            .history
            .record(line.line_number, HistoryKind::Condition, description);
        Ok(())
    }

    pub(crate) fn execute_function_definition(
        &mut self,
        line: &ClassifiedLine,
    ) -> Result<(), StepError> {
        let Some(name) = function_name(&line.text) else {
            return self.execute_other(line);
        };
        let description = format!("Function: {}", name);
        self.state
            .history
            .record(line.line_number, HistoryKind::Other, description);
        Ok(())
    }

    pub(crate) fn execute_return(&mut self, line: &ClassifiedLine) -> Result<(), StepError> {
        let expression = return_expression(&line.text)
            .map(|rest| cut_statement(rest).trim())
            .filter(|rest| !rest.is_empty());
        let Some(expression) = expression else {
            return self.execute_other(line);
        };

        let value = evaluate(expression, &self.state.environment);
        let description = format!("Return: {}", value.repr());
        self.state
            .history
            .record(line.line_number, HistoryKind::Other, description);
        Ok(())
    }

    pub(crate) fn execute_call(&mut self, line: &ClassifiedLine) -> Result<(), StepError> {
        let Some(name) = call_name(&line.text) else {
            return self.execute_other(line);
        };
        let description = format!("Called: {}()", name);
        self.state
            .history
            .record(line.line_number, HistoryKind::Other, description);
        Ok(())
    }

    pub(crate) fn execute_other(&mut self, line: &ClassifiedLine) -> Result<(), StepError> {
        let description = format!("Line {}", line.line_number);
        self.state
            .history
            .record(line.line_number, HistoryKind::Other, description);
        Ok(())
    }
}
