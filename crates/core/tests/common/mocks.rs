use mockall::mock;
use tbsweep_core::sweep::{Registrar, Registration, TestCase};

mock! {
    /// Framework double with programmable registration results.
    pub Framework {}

    impl Registrar for Framework {
        type Error = String;
        fn register(&mut self, registration: Registration) -> Result<(), String>;
    }
}

/// Test case that accepts `capacity` registrations and refuses the next one.
#[derive(Debug)]
pub struct FullTest {
    pub name: String,
    pub capacity: usize,
    pub accepted: Vec<Registration>,
}

impl FullTest {
    pub fn new(name: &str, capacity: usize) -> Self {
        Self {
            name: name.to_string(),
            capacity,
            accepted: Vec::new(),
        }
    }
}

impl Registrar for FullTest {
    type Error = String;

    fn register(&mut self, registration: Registration) -> Result<(), String> {
        if self.accepted.len() == self.capacity {
            return Err(format!("{}: refused {}", self.name, registration.name));
        }
        self.accepted.push(registration);
        Ok(())
    }
}

impl TestCase for FullTest {
    fn name(&self) -> &str {
        &self.name
    }
}
