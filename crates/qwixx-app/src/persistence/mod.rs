//! Saving and restoring the game through [`eframe::Storage`].

mod dto;
pub mod storage;

#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryStorage {
    values: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl eframe::Storage for MemoryStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.values.insert(key.to_owned(), value);
    }

    fn flush(&mut self) {}
}
