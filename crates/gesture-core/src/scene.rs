//! The engine's narrow view of the 3D graph scene.
//!
//! The renderer owns node positions, the camera and its orbit controls. During
//! a tick the engine is the only writer through [`Scene`]; between ticks the
//! renderer is the only reader. Nodes are referred to by [`NodeId`] and looked
//! up again every tick, so removed nodes simply stop resolving.

use crate::camera::Camera;
use fnv::FnvHashMap;
use glam::Vec3;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub trait Scene {
    /// Every node with its current world position, if the layout has one yet.
    fn nodes(&self) -> Box<dyn Iterator<Item = (NodeId, Option<Vec3>)> + '_>;
    fn node_position(&self, id: NodeId) -> Option<Vec3>;
    fn set_node_position(&mut self, id: NodeId, position: Vec3);
    /// `Some` fixes the node outside the physics simulation, `None` releases it.
    fn set_node_pinned(&mut self, id: NodeId, pinned: Option<Vec3>);
    fn camera(&self) -> Camera;
    fn set_camera_pose(&mut self, eye: Vec3, target: Vec3);
    /// Resume the force simulation after a manual position change.
    fn request_reheat(&mut self);
    fn set_highlighted(&mut self, id: NodeId, highlighted: bool);
    /// Constant orbit angular velocity in radians per second, or off.
    fn set_auto_rotate(&mut self, speed: Option<f32>);
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
    pub id: NodeId,
    pub position: Option<Vec3>,
    pub pinned: Option<Vec3>,
    pub highlighted: bool,
}

/// In-process scene used by the replay harness and tests. Iteration follows
/// insertion order.
#[derive(Clone, Debug)]
pub struct MemoryScene {
    nodes: Vec<SceneNode>,
    index: FnvHashMap<NodeId, usize>,
    camera: Camera,
    reheat_requests: usize,
    auto_rotate: Option<f32>,
}

impl MemoryScene {
    pub fn new(camera: Camera) -> Self {
        Self {
            nodes: Vec::new(),
            index: FnvHashMap::default(),
            camera,
            reheat_requests: 0,
            auto_rotate: None,
        }
    }

    /// Insert or replace a node.
    pub fn add_node(&mut self, id: NodeId, position: Option<Vec3>) {
        let node = SceneNode {
            id,
            position,
            pinned: None,
            highlighted: false,
        };
        match self.index.get(&id) {
            Some(&i) => self.nodes[i] = node,
            None => {
                self.index.insert(id, self.nodes.len());
                self.nodes.push(node);
            }
        }
    }

    pub fn remove_node(&mut self, id: NodeId) -> Option<SceneNode> {
        let i = self.index.remove(&id)?;
        let node = self.nodes.remove(i);
        for slot in self.index.values_mut() {
            if *slot > i {
                *slot -= 1;
            }
        }
        Some(node)
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.index.get(&id).map(|&i| &self.nodes[i])
    }

    pub fn highlighted(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|n| n.highlighted)
            .map(|n| n.id)
            .collect()
    }

    pub fn reheat_requests(&self) -> usize {
        self.reheat_requests
    }

    pub fn auto_rotate(&self) -> Option<f32> {
        self.auto_rotate
    }

    /// Stand-in for orbit controls: spin the camera about its target's vertical
    /// axis while auto-rotate is on.
    pub fn advance(&mut self, dt_sec: f32) {
        if let Some(speed) = self.auto_rotate {
            let eye = crate::rotate::orbit_eye(&self.camera, speed * dt_sec, 0.0, 0.0);
            self.camera.eye = eye;
        }
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        let i = *self.index.get(&id)?;
        self.nodes.get_mut(i)
    }
}

impl Scene for MemoryScene {
    fn nodes(&self) -> Box<dyn Iterator<Item = (NodeId, Option<Vec3>)> + '_> {
        Box::new(self.nodes.iter().map(|n| (n.id, n.position)))
    }

    fn node_position(&self, id: NodeId) -> Option<Vec3> {
        self.node(id).and_then(|n| n.position)
    }

    fn set_node_position(&mut self, id: NodeId, position: Vec3) {
        if let Some(n) = self.node_mut(id) {
            n.position = Some(position);
        }
    }

    fn set_node_pinned(&mut self, id: NodeId, pinned: Option<Vec3>) {
        if let Some(n) = self.node_mut(id) {
            n.pinned = pinned;
        }
    }

    fn camera(&self) -> Camera {
        self.camera.clone()
    }

    fn set_camera_pose(&mut self, eye: Vec3, target: Vec3) {
        self.camera.eye = eye;
        self.camera.target = target;
    }

    fn request_reheat(&mut self) {
        self.reheat_requests += 1;
    }

    fn set_highlighted(&mut self, id: NodeId, highlighted: bool) {
        if let Some(n) = self.node_mut(id) {
            n.highlighted = highlighted;
        }
    }

    fn set_auto_rotate(&mut self, speed: Option<f32>) {
        self.auto_rotate = speed;
    }
}
