//=========================================================================
// Input Buffer
//
// Transient per-frame store for keyboard events between Winit callbacks
// and the next frame boundary (RedrawRequested).
//
// Notes:
// Every event is kept, in arrival order. Auto-repeated presses are
// meaningful (each one nudges a motor speed), so nothing is coalesced.
//=========================================================================

//=== Internal Modules ====================================================
use crate::core::input::event::InputEvent;

//=== InputBuffer Struct ==================================================
#[derive(Debug)]
pub(crate) struct InputBuffer {
    events: Vec<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------
    pub(crate) fn new() -> Self {
        const BASE_CAPACITY: usize = 32;

        Self {
            events: Vec::with_capacity(BASE_CAPACITY),
        }
    }

    pub(crate) fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    //--- Drain ------------------------------------------------------------
    //
    // Returns this frame's events and empties the buffer, or `None` when
    // nothing arrived (empty batches are never sent).
    //
    pub(crate) fn drain(&mut self) -> Option<Vec<InputEvent>> {
        if self.events.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.events))
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.events.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::event::KeyCode;

    #[test]
    fn empty_buffer_drains_to_none() {
        let mut buffer = InputBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.drain(), None);
    }

    #[test]
    fn repeated_presses_are_all_kept() {
        let mut buffer = InputBuffer::new();
        buffer.push(InputEvent::KeyDown(KeyCode::ArrowUp));
        buffer.push(InputEvent::KeyDown(KeyCode::ArrowUp));
        buffer.push(InputEvent::KeyDown(KeyCode::ArrowUp));

        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn drain_preserves_order_and_clears() {
        let mut buffer = InputBuffer::new();
        buffer.push(InputEvent::KeyDown(KeyCode::Home));
        buffer.push(InputEvent::KeyUp(KeyCode::Home));
        buffer.push(InputEvent::KeyDown(KeyCode::Space));

        let drained = buffer.drain().unwrap();
        assert_eq!(
            drained,
            vec![
                InputEvent::KeyDown(KeyCode::Home),
                InputEvent::KeyUp(KeyCode::Home),
                InputEvent::KeyDown(KeyCode::Space),
            ]
        );
        assert!(buffer.is_empty());
        assert_eq!(buffer.drain(), None);
    }
}
