// Dashboard page: the skill input, recommend button, results list and
// loading spinner, plus the widget that wires them to the backend.

pub mod messages;
pub mod page;
pub mod terminal;
pub mod widget;

#[cfg(test)]
pub mod memory;
