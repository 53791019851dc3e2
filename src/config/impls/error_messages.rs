use std::fmt::Display;
use crate::config::structs::error_messages::ErrorMessages;

impl Default for ErrorMessages {
    fn default() -> Self {
        Self {
            enum_error: String::from("Invalid value supplied for {}: '{}'. Must be one of: {}"),
            params_mutually_exclusive: String::from("Parameters {} and {} cannot be supplied together"),
            invalid_param: String::from("Invalid value supplied for {}: '{}'"),
        }
    }
}

impl ErrorMessages {
    /// Fills each `{}` in `template` with the next argument.
    ///
    /// Surplus placeholders are left as-is, surplus arguments are ignored.
    pub fn render(template: &str, args: &[&dyn Display]) -> String {
        let mut output = String::with_capacity(template.len() + 32);
        let mut args = args.iter();
        let mut rest = template;
        while let Some(position) = rest.find("{}") {
            output.push_str(&rest[..position]);
            match args.next() {
                Some(arg) => output.push_str(&arg.to_string()),
                None => output.push_str("{}"),
            }
            rest = &rest[position + 2..];
        }
        output.push_str(rest);
        output
    }

    pub fn enum_error(&self, field: &str, value: &str, allowed: &str) -> String {
        Self::render(&self.enum_error, &[&field, &value, &allowed])
    }

    pub fn params_mutually_exclusive(&self, first: &str, second: &str) -> String {
        Self::render(&self.params_mutually_exclusive, &[&first, &second])
    }

    pub fn invalid_param(&self, field: &str, value: &dyn Display) -> String {
        Self::render(&self.invalid_param, &[&field, value])
    }
}
