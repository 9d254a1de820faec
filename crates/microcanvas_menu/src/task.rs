//! Scheduler registration.
//!
//! A menu runs as one repeating task on a cooperatively scheduled
//! runtime. [`MenuTask`] bundles a menu with its collaborators so the
//! whole unit can be handed to the external scheduler as a single
//! polling closure.

use crate::button::ButtonSource;
use crate::canvas::Canvas;
use crate::menu::Menu;
use crate::pacer::Pacer;

/// Scheduler provided by the runtime framework.
pub trait Scheduler {
    /// Registers `task` as a repeating background activity.
    ///
    /// The scheduler invokes the closure once per scheduling round for
    /// the remainder of the process lifetime; there is no cancellation.
    fn add_task(&mut self, task: Box<dyn FnMut() + 'static>, priority: u8);
}

/// A menu bundled with its collaborators, ready to schedule.
pub struct MenuTask<C, B, P> {
    menu: Menu,
    canvas: C,
    buttons: B,
    pacer: P,
}

impl<C, B, P> MenuTask<C, B, P>
where
    C: Canvas,
    B: ButtonSource,
    P: Pacer,
{
    /// Bundles a constructed menu with its collaborators.
    pub fn new(menu: Menu, canvas: C, buttons: B, pacer: P) -> Self {
        Self {
            menu,
            canvas,
            buttons,
            pacer,
        }
    }

    /// Runs one poll step.
    pub fn poll_once(&mut self) {
        self.menu
            .poll(&mut self.canvas, &mut self.buttons, &mut self.pacer);
    }

    /// Returns the menu state.
    #[must_use]
    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Returns mutable access to the menu state.
    pub fn menu_mut(&mut self) -> &mut Menu {
        &mut self.menu
    }

    /// Hands the bundle to the scheduler as a repeating task.
    pub fn spawn_on(self, scheduler: &mut impl Scheduler, priority: u8)
    where
        C: 'static,
        B: 'static,
        P: 'static,
    {
        let mut task = self;
        tracing::debug!(priority, "menu task registered");
        scheduler.add_task(Box::new(move || task.poll_once()), priority);
    }
}
