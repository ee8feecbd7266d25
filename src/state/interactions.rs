//! Interactions Module - Settle-point task scheduling.
//!
//! UI work like keyboard-dismiss transitions or animations registers an
//! interaction handle while it runs. Completion work (the code input's
//! full-fill notification) is scheduled with [`schedule`] and runs at the
//! next settle point: a [`flush`] call made while no interaction handle is
//! active. The event loop flushes once per tick.
//!
//! Two guarantees:
//! - a scheduled task NEVER runs synchronously inside `schedule`, so a
//!   completion callback cannot collide with the handler that triggered it
//! - tasks wait while any interaction is active, so they land after
//!   in-flight transition work has finished
//!
//! There is no cancellation primitive. A task scheduled against a component
//! that is torn down before the flush simply runs against released slots.
//!
//! # Example
//!
//! ```ignore
//! use tui_code_input::state::interactions;
//!
//! let handle = interactions::create_handle();
//! interactions::schedule(|| println!("settled"));
//!
//! interactions::flush();                  // runs nothing - interaction active
//! interactions::clear_handle(handle);
//! interactions::flush();                  // prints "settled"
//! ```

use std::cell::RefCell;
use std::collections::HashSet;

// =============================================================================
// TYPES
// =============================================================================

/// Marker for one in-flight UI interaction (animation, transition).
#[derive(Debug, PartialEq, Eq)]
pub struct InteractionHandle(u64);

/// One-shot task run at the next settle point.
pub type SettleTask = Box<dyn FnOnce()>;

// =============================================================================
// STATE
// =============================================================================

thread_local! {
    static ACTIVE_HANDLES: RefCell<HashSet<u64>> = RefCell::new(HashSet::new());
    static QUEUE: RefCell<Vec<SettleTask>> = RefCell::new(Vec::new());
    static NEXT_HANDLE: RefCell<u64> = const { RefCell::new(0) };
}

// =============================================================================
// INTERACTION HANDLES
// =============================================================================

/// Mark the start of a UI interaction. Scheduled tasks wait until every
/// outstanding handle is cleared.
pub fn create_handle() -> InteractionHandle {
    let id = NEXT_HANDLE.with(|next| {
        let mut next = next.borrow_mut();
        let id = *next;
        *next += 1;
        id
    });
    ACTIVE_HANDLES.with(|handles| {
        handles.borrow_mut().insert(id);
    });
    InteractionHandle(id)
}

/// Mark the end of a UI interaction.
pub fn clear_handle(handle: InteractionHandle) {
    ACTIVE_HANDLES.with(|handles| {
        handles.borrow_mut().remove(&handle.0);
    });
}

/// Check whether no interaction is in flight.
pub fn is_idle() -> bool {
    ACTIVE_HANDLES.with(|handles| handles.borrow().is_empty())
}

// =============================================================================
// SCHEDULING
// =============================================================================

/// Enqueue a task for the next settle point.
///
/// The task never runs inside this call, even when idle - it waits for the
/// next [`flush`].
pub fn schedule<F>(task: F)
where
    F: FnOnce() + 'static,
{
    QUEUE.with(|queue| {
        queue.borrow_mut().push(Box::new(task));
    });
}

/// Number of tasks waiting for a settle point.
pub fn pending_count() -> usize {
    QUEUE.with(|queue| queue.borrow().len())
}

/// Run pending tasks if no interaction is active.
///
/// Tasks scheduled by a running task are picked up in the same flush.
/// Returns the number of tasks run.
pub fn flush() -> usize {
    let mut ran = 0;

    loop {
        if !is_idle() {
            break;
        }

        // Take the whole batch so tasks can schedule without re-entrancy
        let batch: Vec<SettleTask> = QUEUE.with(|queue| queue.borrow_mut().drain(..).collect());
        if batch.is_empty() {
            break;
        }

        for task in batch {
            task();
            ran += 1;
        }
    }

    if ran > 0 {
        log::debug!("settle point: ran {ran} deferred task(s)");
    }
    ran
}

// =============================================================================
// RESET (for testing)
// =============================================================================

/// Reset scheduler state (for testing)
pub fn reset_interactions_state() {
    ACTIVE_HANDLES.with(|handles| handles.borrow_mut().clear());
    QUEUE.with(|queue| queue.borrow_mut().clear());
    NEXT_HANDLE.with(|next| *next.borrow_mut() = 0);
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn setup() {
        reset_interactions_state();
    }

    #[test]
    fn test_schedule_never_runs_synchronously() {
        setup();

        let ran = Rc::new(Cell::new(false));
        let ran_clone = ran.clone();

        schedule(move || ran_clone.set(true));

        // Idle, but still not run until a flush
        assert!(is_idle());
        assert!(!ran.get());
        assert_eq!(pending_count(), 1);

        assert_eq!(flush(), 1);
        assert!(ran.get());
        assert_eq!(pending_count(), 0);
    }

    #[test]
    fn test_active_interaction_defers_flush() {
        setup();

        let ran = Rc::new(Cell::new(false));
        let ran_clone = ran.clone();

        let handle = create_handle();
        schedule(move || ran_clone.set(true));

        assert!(!is_idle());
        assert_eq!(flush(), 0);
        assert!(!ran.get());

        clear_handle(handle);
        assert!(is_idle());
        assert_eq!(flush(), 1);
        assert!(ran.get());
    }

    #[test]
    fn test_multiple_handles_all_must_clear() {
        setup();

        let a = create_handle();
        let b = create_handle();

        schedule(|| {});

        clear_handle(a);
        assert_eq!(flush(), 0);

        clear_handle(b);
        assert_eq!(flush(), 1);
    }

    #[test]
    fn test_tasks_run_in_order() {
        setup();

        let order = Rc::new(RefCell::new(Vec::new()));

        for i in 0..3 {
            let order = order.clone();
            schedule(move || order.borrow_mut().push(i));
        }

        flush();
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_task_scheduled_during_flush_runs_same_flush() {
        setup();

        let inner_ran = Rc::new(Cell::new(false));
        let inner_clone = inner_ran.clone();

        schedule(move || {
            let inner_clone = inner_clone.clone();
            schedule(move || inner_clone.set(true));
        });

        assert_eq!(flush(), 2);
        assert!(inner_ran.get());
    }

    #[test]
    fn test_flush_empty_queue() {
        setup();
        assert_eq!(flush(), 0);
    }
}
