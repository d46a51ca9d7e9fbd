/// Open/closed toggle for the navigation drawer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// UI-only state owned by the shell.
#[derive(Debug, Default)]
pub struct ShellState {
    pub menu: MenuState,
    /// egui time (seconds) at which the countdown mounted.
    pub mounted_at: Option<f64>,
}

impl ShellState {
    /// Seconds since mount, zero before it.
    pub fn elapsed(&self, now: f64) -> f32 {
        self.mounted_at
            .map(|start| (now - start).max(0.0) as f32)
            .unwrap_or(0.0)
    }
}
