//! Process-level flags and the transient status-bar message.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub status_message: Option<String>,
}

impl SystemState {
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_message(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_message_lifecycle() {
        let mut system = SystemState::default();
        assert_eq!(system.status_message, None);

        system.set_message("[Added waiter] Sam");
        assert_eq!(system.status_message.as_deref(), Some("[Added waiter] Sam"));

        system.clear_message();
        assert_eq!(system.status_message, None);
    }
}
