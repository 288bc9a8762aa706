use crossterm::event::{KeyEvent, MouseEvent};

/// All events funnelled through the main loop's mpsc channel.
pub enum AppEvent {
    /// A keypress from the terminal-reading thread.
    Key(KeyEvent),
    /// Pointer movement, clicks and wheel scrolls.
    Mouse(MouseEvent),
    /// The terminal was resized.
    Resize,
    /// Once-a-second clock tick (countdown, timeline progress).
    Tick,
    /// Animation frame while something is moving.
    Frame,
    /// Time for the hero carousel to slide to its next image.
    CarouselAdvance,
    /// The watched content file changed on disk (debounced).
    ContentChanged,
}
