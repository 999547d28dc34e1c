//! Mirror of the JS scene graph. Reads come from the mirror; every write is
//! applied to the mirror and forwarded to JS through one sink callback as
//! `sink(kind, payload)`.

use fnv::FnvHashMap;
use gesture_core::{Camera, NodeId, Scene};
use glam::Vec3;
use wasm_bindgen::JsValue;

pub struct JsScene {
    nodes: Vec<(NodeId, Option<Vec3>)>,
    index: FnvHashMap<NodeId, usize>,
    camera: Camera,
    sink: js_sys::Function,
}

impl JsScene {
    pub fn new(sink: js_sys::Function) -> Self {
        Self {
            nodes: Vec::new(),
            index: FnvHashMap::default(),
            camera: Camera::new(Vec3::new(0.0, 0.0, 500.0), Vec3::ZERO),
            sink,
        }
    }

    pub fn sync_node(&mut self, id: NodeId, position: Option<Vec3>) {
        match self.index.get(&id) {
            Some(&i) => self.nodes[i].1 = position,
            None => {
                self.index.insert(id, self.nodes.len());
                self.nodes.push((id, position));
            }
        }
    }

    pub fn remove_node(&mut self, id: NodeId) {
        if let Some(i) = self.index.remove(&id) {
            self.nodes.remove(i);
            for slot in self.index.values_mut() {
                if *slot > i {
                    *slot -= 1;
                }
            }
        }
    }

    pub fn sync_camera(&mut self, eye: Vec3, target: Vec3, fovy_radians: f32) {
        self.camera.eye = eye;
        self.camera.target = target;
        self.camera.fovy_radians = fovy_radians;
    }

    pub fn emit(&self, kind: &str, payload: &[JsValue]) {
        let args: js_sys::Array = payload.iter().collect();
        if let Err(e) = self
            .sink
            .call2(&JsValue::NULL, &JsValue::from_str(kind), &args)
        {
            log::warn!("[bridge] scene sink failed for {}: {:?}", kind, e);
        }
    }
}

fn num(v: f32) -> JsValue {
    JsValue::from_f64(v as f64)
}

fn vec3(v: Vec3) -> [JsValue; 3] {
    [num(v.x), num(v.y), num(v.z)]
}

impl Scene for JsScene {
    fn nodes(&self) -> Box<dyn Iterator<Item = (NodeId, Option<Vec3>)> + '_> {
        Box::new(self.nodes.iter().copied())
    }

    fn node_position(&self, id: NodeId) -> Option<Vec3> {
        self.index.get(&id).and_then(|&i| self.nodes[i].1)
    }

    fn set_node_position(&mut self, id: NodeId, position: Vec3) {
        if let Some(&i) = self.index.get(&id) {
            self.nodes[i].1 = Some(position);
            let [x, y, z] = vec3(position);
            self.emit("position", &[JsValue::from(id.0), x, y, z]);
        }
    }

    fn set_node_pinned(&mut self, id: NodeId, pinned: Option<Vec3>) {
        match pinned {
            Some(p) => {
                let [x, y, z] = vec3(p);
                self.emit("pin", &[JsValue::from(id.0), x, y, z]);
            }
            None => self.emit("unpin", &[JsValue::from(id.0)]),
        }
    }

    fn camera(&self) -> Camera {
        self.camera.clone()
    }

    fn set_camera_pose(&mut self, eye: Vec3, target: Vec3) {
        self.camera.eye = eye;
        self.camera.target = target;
        let [ex, ey, ez] = vec3(eye);
        let [tx, ty, tz] = vec3(target);
        self.emit("camera", &[ex, ey, ez, tx, ty, tz]);
    }

    fn request_reheat(&mut self) {
        self.emit("reheat", &[]);
    }

    fn set_highlighted(&mut self, id: NodeId, highlighted: bool) {
        self.emit("highlight", &[JsValue::from(id.0), JsValue::from_bool(highlighted)]);
    }

    fn set_auto_rotate(&mut self, speed: Option<f32>) {
        let payload = speed.map(num).unwrap_or(JsValue::NULL);
        self.emit("auto_rotate", &[payload]);
    }
}
