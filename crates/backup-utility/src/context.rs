use core::fmt::Display;

/// Holds the context for the server currently being processed. Used for
/// prefixing logs.
#[derive(Default, Debug)]
pub struct Context {
    /// The server being processed.
    pub server: Option<String>,

    /// The current step.
    pub current_step: &'static str,
}

impl Display for Context {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if let Some(server) = &self.server {
            write!(f, "[{server}] ")?;
        }

        write!(f, "[{}] ", self.current_step)?;

        Ok(())
    }
}
