//! Checklist state: an ordered, index-addressed item collection with
//! subscribe/notify re-render triggering.
//!
//! `ChecklistState` is the single source of truth for what a checklist card
//! displays. The displaying card owns the state and is its sole mutator; the
//! mutation methods below are the only way to change the rendered rows.
//! Every mutation is total: an out-of-range index is a silent no-op,
//! observably indistinguishable from a correctly-guarded call.

use tracing::debug;

// ---------------------------------------------------------------------------
// ChecklistItem
// ---------------------------------------------------------------------------

/// One titled, checkable row of a checklist.
///
/// Items carry no identity of their own; position in the owning
/// [`ChecklistState`] is the only address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub title: String,
    pub checked: bool,
}

impl ChecklistItem {
    /// Create an unchecked item with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            checked: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Subscriptions
// ---------------------------------------------------------------------------

/// Identifies a subscriber slot inside a [`ChecklistState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

type Subscriber = Box<dyn FnMut(&[ChecklistItem])>;

// ---------------------------------------------------------------------------
// ChecklistState
// ---------------------------------------------------------------------------

/// An ordered, mutable, index-addressed collection of checklist items.
///
/// Indices are always in `[0, len)`; no operation produces a gap or a
/// duplicate position. Subscribers registered with [`subscribe`] are invoked
/// once after each effective mutation, with the post-mutation items; a
/// guarded no-op notifies nobody.
///
/// Note the deliberate `insert_item` boundary: insertion requires
/// `index < len`, so `index == len` ("insert at the end") is a no-op and only
/// [`add_item`] can grow the list at the tail. Review with a product owner
/// before ever relaxing this.
///
/// [`subscribe`]: ChecklistState::subscribe
/// [`add_item`]: ChecklistState::add_item
#[derive(Default)]
pub struct ChecklistState {
    items: Vec<ChecklistItem>,
    subscribers: Vec<Option<Subscriber>>,
}

impl ChecklistState {
    /// Create an empty checklist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a checklist seeded with one unchecked item per title.
    pub fn from_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: titles.into_iter().map(ChecklistItem::new).collect(),
            subscribers: Vec::new(),
        }
    }

    /// The items in display order.
    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    /// The number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the checklist has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Append an unchecked item with the given title.
    pub fn add_item(&mut self, title: impl Into<String>) {
        self.items.push(ChecklistItem::new(title));
        debug!(len = self.items.len(), "checklist item appended");
        self.notify();
    }

    /// Insert an unchecked item before position `index`, shifting later
    /// items one position back.
    ///
    /// Requires `index < len`: an index at or past the end — including
    /// `index == len` — leaves the collection unchanged. Appending is only
    /// possible via [`add_item`](ChecklistState::add_item).
    pub fn insert_item(&mut self, title: impl Into<String>, index: usize) {
        if index >= self.items.len() {
            return;
        }
        self.items.insert(index, ChecklistItem::new(title));
        debug!(index, len = self.items.len(), "checklist item inserted");
        self.notify();
    }

    /// Replace the title of the item at `index`, leaving its checked state
    /// untouched. Out-of-range indices are a no-op.
    pub fn update_item(&mut self, index: usize, title: impl Into<String>) {
        let Some(item) = self.items.get_mut(index) else {
            return;
        };
        item.title = title.into();
        debug!(index, "checklist item retitled");
        self.notify();
    }

    /// Remove the item at `index`, shifting later items one position
    /// forward. Out-of-range indices are a no-op.
    pub fn remove_item(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        self.items.remove(index);
        debug!(index, len = self.items.len(), "checklist item removed");
        self.notify();
    }

    /// Flip the checked state of the item at `index`. Out-of-range indices
    /// are a no-op.
    pub fn toggle_item(&mut self, index: usize) {
        let Some(item) = self.items.get_mut(index) else {
            return;
        };
        item.checked = !item.checked;
        debug!(index, checked = item.checked, "checklist item toggled");
        self.notify();
    }

    /// Remove every item. Always notifies, even when already empty.
    pub fn clear_items(&mut self) {
        self.items.clear();
        debug!("checklist cleared");
        self.notify();
    }

    // -----------------------------------------------------------------------
    // Subscriptions
    // -----------------------------------------------------------------------

    /// Register a callback invoked after each effective mutation with the
    /// post-mutation items. Returns an id for [`unsubscribe`].
    ///
    /// [`unsubscribe`]: ChecklistState::unsubscribe
    pub fn subscribe(&mut self, f: impl FnMut(&[ChecklistItem]) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.subscribers.len());
        self.subscribers.push(Some(Box::new(f)));
        id
    }

    /// Deactivate a subscriber so it no longer receives notifications.
    /// Unknown or already-removed ids are a no-op.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        if let Some(slot) = self.subscribers.get_mut(id.0) {
            *slot = None;
        }
    }

    /// Invoke every active subscriber with the current items.
    ///
    /// Runs after the collection has reached its final state, so callbacks
    /// never observe a partially-applied mutation.
    fn notify(&mut self) {
        let items = &self.items;
        for slot in &mut self.subscribers {
            if let Some(callback) = slot.as_mut() {
                callback(items);
            }
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
