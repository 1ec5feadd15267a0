//! Model change events
//!
//! Views subscribe to a model and are called synchronously after each
//! mutation completes. Events are typed so observers can ignore categories
//! they do not render.

/// A typed model change event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelEvent {
    /// Object list or object content changed.
    Changed,
    /// Selection state changed.
    SelectionChanged,
    /// Document name / file path changed.
    NameChanged,
    /// Modified flag flipped.
    ModifiedChanged,
    /// Template replaced.
    TemplateChanged,
    /// Merge backend or source changed.
    MergeChanged,
    /// Variable collection changed.
    VariablesChanged,
}

/// Handle returned by [`ObserverList::subscribe`]; pass to
/// [`ObserverList::unsubscribe`] to detach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserverId(usize);

type Observer = Box<dyn Fn(ModelEvent)>;

/// Ordered list of event observers.
#[derive(Default)]
pub struct ObserverList {
    next_id: usize,
    observers: Vec<(usize, Observer)>,
}

impl ObserverList {
    pub fn new() -> Self {
        ObserverList::default()
    }

    /// Attach an observer; it is called for every subsequent event.
    pub fn subscribe(&mut self, observer: impl Fn(ModelEvent) + 'static) -> ObserverId {
        let id = self.next_id;
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        ObserverId(id)
    }

    /// Detach an observer. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: ObserverId) {
        self.observers.retain(|(observer_id, _)| *observer_id != id.0);
    }

    /// Deliver an event to every observer, in subscription order.
    pub fn emit(&self, event: ModelEvent) {
        for (_, observer) in &self.observers {
            observer(event);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for ObserverList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverList")
            .field("observers", &self.observers.len())
            .finish()
    }
}
