//! Row-clear celebration events.
//!
//! The engine appends one event per commit that clears rows. Consumers show
//! it and acknowledge it through [`ConfettiList::retire`], which only flips
//! the alive flag; filtering dead entries is up to the consumer.

/// One row-clear event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfettiEvent {
    pub id: u32,
    /// Rows cleared by the commit.
    pub magnitude: u8,
    pub alive: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfettiList {
    events: Vec<ConfettiEvent>,
}

impl ConfettiList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event; its id follows the last event's id (0 when empty).
    pub fn push(&mut self, magnitude: u8) -> u32 {
        let id = self.events.last().map_or(0, |e| e.id.wrapping_add(1));
        self.events.push(ConfettiEvent {
            id,
            magnitude,
            alive: true,
        });
        id
    }

    /// Mark the event with `id` as dead. Returns false for unknown ids.
    pub fn retire(&mut self, id: u32) -> bool {
        match self.events.iter_mut().find(|e| e.id == id) {
            Some(event) => {
                event.alive = false;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn events(&self) -> &[ConfettiEvent] {
        &self.events
    }

    pub fn alive(&self) -> impl Iterator<Item = &ConfettiEvent> {
        self.events.iter().filter(|e| e.alive)
    }
}
