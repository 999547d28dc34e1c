//! The per-frame gesture pipeline.
//!
//! All mutable interaction state lives in one [`GestureEngine`] value. A tick
//! applies queued requests, then runs smoothing, projection, the classifier
//! and controller selected by the current mode, and finally hover highlighting.
//! Nothing in a tick fails: missing hands, zero-sized surfaces and unpositioned
//! nodes all degrade to no-ops.

use crate::commands::EngineRequest;
use crate::config::{ConfigError, EngineConfig};
use crate::constants::{HAND_SLOTS, WRIST};
use crate::drag::{DragController, DraggedNode};
use crate::events::EngineEvent;
use crate::hand::HandSlot;
use crate::hover::HoverHighlighter;
use crate::landmarks::HandFrame;
use crate::mode::{InteractionMode, ModeMachine};
use crate::projection::{project_landmark, Viewport};
use crate::rotate::RotateController;
use crate::scene::{NodeId, Scene};
use crate::smoothing::LandmarkSmoother;
use crate::zoom::{ZoomBaseline, ZoomController};
use std::collections::VecDeque;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    /// False when the frame's timestamp was not newer than the last one.
    pub processed: bool,
    pub events: Vec<EngineEvent>,
}

/// Snapshot for a status display.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineStatus {
    pub mode: InteractionMode,
    pub auto_rotate: bool,
    pub visible_hands: [bool; HAND_SLOTS],
    pub dragged: Option<NodeId>,
    pub hovered: Option<NodeId>,
    pub zooming: bool,
}

pub struct GestureEngine {
    config: EngineConfig,
    mode: ModeMachine,
    hands: [HandSlot; HAND_SLOTS],
    smoother: LandmarkSmoother,
    drag: DragController,
    rotate: RotateController,
    zoom: ZoomController,
    hover: HoverHighlighter,
    pending: VecDeque<EngineRequest>,
    last_timestamp_ms: Option<f64>,
}

impl GestureEngine {
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            smoother: LandmarkSmoother::new(config.smoothing_alpha),
            config,
            mode: ModeMachine::default(),
            hands: Default::default(),
            drag: DragController::default(),
            rotate: RotateController::default(),
            zoom: ZoomController::default(),
            hover: HoverHighlighter::default(),
            pending: VecDeque::new(),
            last_timestamp_ms: None,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Change one tunable. The whole config is re-validated before it is kept.
    pub fn set_tunable(&mut self, name: &str, value: f32) -> Result<(), ConfigError> {
        let mut next = self.config.clone();
        next.set(name, value)?;
        next.validate()?;
        if next.smoothing_alpha != self.config.smoothing_alpha {
            self.smoother = LandmarkSmoother::new(next.smoothing_alpha);
        }
        self.config = next;
        Ok(())
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode.current()
    }

    pub fn hands(&self) -> &[HandSlot; HAND_SLOTS] {
        &self.hands
    }

    pub fn dragged(&self) -> Option<&DraggedNode> {
        self.drag.dragged()
    }

    pub fn zoom_baseline(&self) -> Option<&ZoomBaseline> {
        self.zoom.baseline()
    }

    pub fn hovered(&self) -> Option<NodeId> {
        self.hover.hovered()
    }

    pub fn auto_rotate(&self) -> bool {
        self.rotate.auto_rotate()
    }

    pub fn status(&self) -> EngineStatus {
        EngineStatus {
            mode: self.mode(),
            auto_rotate: self.auto_rotate(),
            visible_hands: [self.hands[0].visible(), self.hands[1].visible()],
            dragged: self.dragged().map(|d| d.node),
            hovered: self.hovered(),
            zooming: self.zoom_baseline().is_some(),
        }
    }

    /// Queue a request; it takes effect at the start of the next tick.
    pub fn request(&mut self, request: EngineRequest) {
        self.pending.push_back(request);
    }

    pub fn tick(
        &mut self,
        frame: &HandFrame,
        viewport: Viewport,
        scene: &mut dyn Scene,
    ) -> TickReport {
        let mut events = Vec::new();
        while let Some(request) = self.pending.pop_front() {
            self.apply(request, scene, &mut events);
        }

        if self
            .last_timestamp_ms
            .is_some_and(|last| frame.timestamp_ms <= last)
        {
            return TickReport {
                processed: false,
                events,
            };
        }
        self.last_timestamp_ms = Some(frame.timestamp_ms);

        let projection = viewport.projection();
        let canvas = viewport.surface;

        for i in 0..HAND_SLOTS {
            match frame.hands.get(i).filter(|raw| !raw.is_empty()) {
                Some(raw) => {
                    let smoothed = self.smoother.smooth(i, raw);
                    let slot = &mut self.hands[i];
                    slot.anchor_screen = smoothed
                        .get(WRIST)
                        .and_then(|&w| project_landmark(w, projection.as_ref(), canvas.x, canvas.y));
                    slot.landmarks = Some(smoothed);
                }
                None => self.lose_hand(i, scene, &mut events),
            }
        }

        match self.mode.current() {
            InteractionMode::Drag => {
                for (i, slot) in self.hands.iter_mut().enumerate() {
                    if slot.visible() {
                        self.drag.update_hand(
                            i,
                            slot,
                            projection.as_ref(),
                            canvas,
                            &self.config,
                            scene,
                            &mut events,
                        );
                    }
                }
            }
            InteractionMode::Rotate => {
                for (i, slot) in self.hands.iter_mut().enumerate() {
                    if slot.visible() {
                        self.rotate.update_hand(
                            i,
                            slot,
                            projection.as_ref(),
                            canvas,
                            &self.config,
                            scene,
                            &mut events,
                        );
                    }
                }
            }
            InteractionMode::Zoom => {
                for slot in &mut self.hands {
                    slot.clear_pinch();
                    slot.clear_fist();
                }
                self.zoom.update(&self.hands, &self.config, scene, &mut events);
            }
        }

        if self.mode.current() == InteractionMode::Drag {
            self.hover.update(
                &self.hands,
                self.drag.dragged().map(|d| d.hand),
                projection.as_ref(),
                canvas,
                self.config.hover_threshold_px,
                scene,
                &mut events,
            );
        } else {
            self.hover.clear(scene, &mut events);
        }

        TickReport {
            processed: true,
            events,
        }
    }

    fn apply(&mut self, request: EngineRequest, scene: &mut dyn Scene, events: &mut Vec<EngineEvent>) {
        match request {
            EngineRequest::SetMode(target) => self.transition_to(target, scene, events),
            EngineRequest::ToggleAutoRotate => {
                let enabled = !self.rotate.auto_rotate();
                if enabled && self.hands.iter().any(|slot| slot.is_fist_closed) {
                    log::info!("[rotate] auto-rotate ignored while a grip is held");
                    return;
                }
                self.rotate
                    .set_auto_rotate(enabled, &self.config, scene, events);
            }
        }
    }

    /// The mode state machine's transition: release any drag, stop
    /// auto-rotate, clear gesture state the target mode does not use, then
    /// commit the new mode.
    fn transition_to(
        &mut self,
        target: InteractionMode,
        scene: &mut dyn Scene,
        events: &mut Vec<EngineEvent>,
    ) {
        if !self.mode.changes_to(target) {
            return;
        }
        if let Some(hand) = self.drag.dragged().map(|d| d.hand) {
            self.drag.release(hand, scene, events);
            self.hands[hand].clear_pinch();
        }
        self.rotate.set_auto_rotate(false, &self.config, scene, events);
        for slot in &mut self.hands {
            if target != InteractionMode::Rotate {
                slot.clear_fist();
            }
            if target != InteractionMode::Drag {
                slot.clear_pinch();
            }
        }
        if target != InteractionMode::Zoom {
            self.zoom.clear();
        }
        if target != InteractionMode::Drag {
            self.hover.clear(scene, events);
        }
        let from = self.mode.commit(target);
        log::info!("[mode] {} -> {}", from, target);
        events.push(EngineEvent::ModeChanged { from, to: target });
    }

    fn lose_hand(&mut self, hand: usize, scene: &mut dyn Scene, events: &mut Vec<EngineEvent>) {
        if !self.hands[hand].visible() {
            return;
        }
        self.drag.release(hand, scene, events);
        self.hands[hand].lose();
        self.smoother.reset_slot(hand);
        self.zoom.clear();
        log::info!("[hands] hand {} lost", hand);
        events.push(EngineEvent::HandLost { hand });
    }
}
