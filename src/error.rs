/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the fallible accessors and arithmetic of [`Vector2D`](crate::Vector2D) and
/// [`Point2D`](crate::Point2D).
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A component was requested by index, but 2D values only have the components 0 (x) and 1 (y).
    #[error("component index {index} is out of range for a 2-component value")]
    ComponentOutOfRange { index: usize },

    /// A vector was divided by a zero scalar.
    #[error("division of a vector by zero")]
    DivisionByZero,
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn messages_are_stable() {
        insta::assert_snapshot!(
            Error::ComponentOutOfRange { index: 2 }.to_string(),
            @"component index 2 is out of range for a 2-component value"
        );
        insta::assert_snapshot!(Error::DivisionByZero.to_string(), @"division of a vector by zero");
    }
}
