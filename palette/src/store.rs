use crate::error::Result;
use glaze::{ThemeConfiguration, ThemePath};

type Listener = Box<dyn Fn(&ThemeConfiguration) + Send + Sync>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owns the theme and notifies subscribers after every mutation.
#[derive(Default)]
pub struct ThemeStore {
    theme: ThemeConfiguration,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl ThemeStore {
    pub fn new(theme: ThemeConfiguration) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn theme(&self) -> &ThemeConfiguration {
        &self.theme
    }

    pub fn snapshot(&self) -> ThemeConfiguration {
        self.theme.clone()
    }

    pub fn get(&self, path: &ThemePath) -> Option<&str> {
        self.theme.get(path)
    }

    pub fn subscribe(
        &mut self,
        listener: impl Fn(&ThemeConfiguration) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Writes a leaf and notifies, even when the value is unchanged.
    pub fn set(&mut self, path: &ThemePath, value: impl Into<String>) -> Result<()> {
        self.theme.set(path, value)?;
        self.notify();
        Ok(())
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.theme);
        }
    }
}
