//! Dock runtime - owns the model, the platform and the event queue

use std::collections::VecDeque;
use std::time::Duration;

use crate::commands::Cmd;
use crate::config::DockConfig;
use crate::geometry::{Orientation, Point};
use crate::gesture::TabPointerEvent;
use crate::messages::{LayoutMsg, Msg, PanelMsg, TabMsg, WindowMsg};
use crate::model::DockModel;
use crate::panel::PanelId;
use crate::panels::PanelContent;
use crate::platform::{Platform, PlatformSnapshot};
use crate::scheduler::TimerQueue;
use crate::update::{self, update};
use crate::window::WindowId;

/// Upper bound on messages handled by one `pump_events` call
const MAX_PUMPED_MESSAGES: usize = 10_000;

/// Drives the docking model: dispatches messages, runs their commands,
/// delivers queued notifications and fires drag timers.
#[derive(Debug)]
pub struct DockRuntime<P: Platform> {
    pub model: DockModel,
    platform: P,
    queue: VecDeque<Msg>,
    timers: TimerQueue,
    now: Duration,
    /// Commands for the host application (context menus, raising windows...)
    host_cmds: Vec<Cmd>,
    quit_requested: bool,
}

impl<P: Platform> DockRuntime<P> {
    /// Create the runtime together with the main window
    pub fn new(config: DockConfig, platform: P) -> Self {
        let snapshot = PlatformSnapshot::capture(&platform);
        let mut model = DockModel::new(config, snapshot);
        let geometry = model.main_window_geometry();
        let main = model.create_window(geometry);
        tracing::info!(window = %main, ?geometry, "main window created");

        Self {
            model,
            platform,
            queue: VecDeque::new(),
            timers: TimerQueue::new(),
            now: Duration::ZERO,
            host_cmds: Vec::new(),
            quit_requested: false,
        }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// Time elapsed on the runtime clock
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Whether a panel's drag timer is scheduled
    pub fn timer_running(&self, panel: PanelId) -> bool {
        self.timers.is_running(panel)
    }

    pub fn pending_messages(&self) -> usize {
        self.queue.len()
    }

    /// Take the commands meant for the host application
    pub fn drain_host_commands(&mut self) -> Vec<Cmd> {
        std::mem::take(&mut self.host_cmds)
    }

    // =========================================================================
    // Event loop
    // =========================================================================

    fn refresh_platform(&mut self) {
        self.model.platform = PlatformSnapshot::capture(&self.platform);
    }

    /// Run one message through `update` and execute its commands.
    /// Queued notifications stay queued until `pump_events`.
    pub fn dispatch(&mut self, msg: Msg) {
        self.refresh_platform();
        if let Some(cmd) = update(&mut self.model, msg) {
            self.process_cmd(cmd);
        }
    }

    /// Dispatch and then deliver everything that got queued
    pub fn send(&mut self, msg: Msg) {
        self.dispatch(msg);
        self.pump_events();
    }

    /// Deliver queued messages until the queue is empty.
    /// Returns the number of messages delivered.
    pub fn pump_events(&mut self) -> usize {
        let mut delivered = 0;
        while let Some(msg) = self.queue.pop_front() {
            if delivered >= MAX_PUMPED_MESSAGES {
                tracing::warn!(
                    remaining = self.queue.len() + 1,
                    "event queue did not settle, dropping the rest"
                );
                self.queue.clear();
                break;
            }
            self.dispatch(msg);
            delivered += 1;
        }
        delivered
    }

    /// Move the clock forward, firing due drag timers in deadline order
    pub fn advance_time(&mut self, dt: Duration) {
        let target = self.now + dt;
        while let Some(deadline) = self.timers.next_deadline().filter(|d| *d <= target) {
            self.now = self.now.max(deadline);
            while let Some(panel) = self.timers.pop_due(self.now) {
                self.dispatch(Msg::Panel(PanelMsg::TimerTick(panel)));
                self.pump_events();
            }
        }
        self.now = target;
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw(_) => {}
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
            Cmd::Queue(msg) => self.queue.push_back(*msg),
            Cmd::StartDragTimer(panel) => {
                let period = self.model.config.drag_tick();
                self.timers.start(panel, self.now, period);
            }
            Cmd::StopDragTimer(panel) => {
                self.timers.cancel(panel);
            }
            Cmd::WarpPointer(to) => self.platform.warp_pointer(to),
            Cmd::Quit => {
                self.quit_requested = true;
                self.host_cmds.push(Cmd::Quit);
            }
            other @ (Cmd::BeginWindowDrag(_)
            | Cmd::ShowContextMenu { .. }
            | Cmd::RaiseWindow(_)) => self.host_cmds.push(other),
        }
    }

    // =========================================================================
    // Caller-facing API
    // =========================================================================

    pub fn main_window(&self) -> Option<WindowId> {
        self.model.windows.main_window()
    }

    /// Window a panel belongs to
    pub fn owner_window(&self, panel: PanelId) -> Option<WindowId> {
        self.model.owner_of(panel)
    }

    /// Add a panel to the main window
    pub fn add_panel(
        &mut self,
        content: Box<dyn PanelContent>,
        title: impl Into<String>,
        sibling: Option<PanelId>,
    ) -> Option<PanelId> {
        let window = self.main_window()?;
        self.add_panel_to(window, content, title, sibling)
    }

    /// Add a panel to a window, tabbed with `sibling` when given
    pub fn add_panel_to(
        &mut self,
        window: WindowId,
        content: Box<dyn PanelContent>,
        title: impl Into<String>,
        sibling: Option<PanelId>,
    ) -> Option<PanelId> {
        self.refresh_platform();
        let (panel, cmd) = update::add_panel(&mut self.model, window, content, title, sibling)?;
        if let Some(cmd) = cmd {
            self.process_cmd(cmd);
        }
        // Geometry right after insertion is stale until pending events ran
        self.pump_events();
        self.send(Msg::Layout(LayoutMsg::BringToFront(panel)));
        Some(panel)
    }

    /// Add two linked views of one file, placed side by side when possible
    pub fn add_panel_pair(
        &mut self,
        window: WindowId,
        first: (Box<dyn PanelContent>, String),
        second: (Box<dyn PanelContent>, String),
    ) -> Option<(PanelId, PanelId)> {
        self.refresh_platform();
        let (pair, cmd) = update::add_panel_pair(&mut self.model, window, first, second)?;
        if let Some(cmd) = cmd {
            self.process_cmd(cmd);
        }
        self.pump_events();
        self.send(Msg::Layout(LayoutMsg::BringToFront(pair.0)));
        self.send(Msg::Layout(LayoutMsg::BringToFront(pair.1)));
        Some(pair)
    }

    pub fn move_panel_to_window(&mut self, window: WindowId, panel: PanelId) {
        self.send(Msg::Layout(LayoutMsg::MoveInto { window, panel }));
    }

    pub fn split(&mut self, first: PanelId, second: PanelId, orientation: Orientation) {
        self.send(Msg::Layout(LayoutMsg::Split {
            first,
            second,
            orientation,
        }));
    }

    /// First window on a display, creating a maximized one if none is there
    pub fn get_or_create_window_for_display(&mut self, display: usize) -> Option<WindowId> {
        self.refresh_platform();
        update::get_or_create_window_for_display(&mut self.model, display)
    }

    pub fn set_floating(&mut self, panel: PanelId, floating: bool) {
        self.send(Msg::Panel(PanelMsg::SetFloating { panel, floating }));
    }

    /// Move a floating panel's frame to a new top-left corner
    pub fn move_panel(&mut self, panel: PanelId, to: Point) {
        self.send(Msg::Panel(PanelMsg::Moved { panel, to }));
    }

    pub fn tab_pointer(&mut self, window: WindowId, event: TabPointerEvent) {
        self.send(Msg::Tab(TabMsg::Pointer { window, event }));
    }

    pub fn close_panel(&mut self, panel: PanelId) {
        self.send(Msg::Panel(PanelMsg::Close(panel)));
    }

    pub fn close_window(&mut self, window: WindowId) {
        self.send(Msg::Window(WindowMsg::Close(window)));
    }

    /// Show a panel: front tab, window restored and raised
    pub fn raise_panel(&mut self, panel: PanelId) {
        self.send(Msg::Layout(LayoutMsg::Raise(panel)));
    }

    pub fn set_no_title_bars(&mut self, window: WindowId, enabled: bool) {
        self.send(Msg::Window(WindowMsg::SetNoTitleBars { window, enabled }));
    }
}
