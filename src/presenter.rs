//! Boundary between the carousel controller and whatever draws it.

/// Where the strip should sit after a navigation.
///
/// `offset` is `-index * slide_pitch`; the presentation layer animates the
/// strip towards it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderInstruction {
    pub index: usize,
    pub offset: f32,
}

/// Receives render instructions and indicator updates.
///
/// The controller never waits on a presenter: the transition lock is released
/// by the settle timer whether or not the presenter finished animating.
pub trait Presenter {
    fn render(&mut self, instruction: RenderInstruction);

    /// Highlight the dot/marker for `active_index`.
    fn indicate(&mut self, active_index: usize);
}

/// Presenter that keeps every call for later inspection.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingPresenter {
    pub renders: Vec<RenderInstruction>,
    pub indicators: Vec<usize>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<RenderInstruction> {
        self.renders.last().copied()
    }

    /// Indices of every emitted render instruction, in order.
    pub fn indices(&self) -> Vec<usize> {
        self.renders.iter().map(|r| r.index).collect()
    }

    pub fn clear(&mut self) {
        self.renders.clear();
        self.indicators.clear();
    }
}

impl Presenter for RecordingPresenter {
    fn render(&mut self, instruction: RenderInstruction) {
        self.renders.push(instruction);
    }

    fn indicate(&mut self, active_index: usize) {
        self.indicators.push(active_index);
    }
}
