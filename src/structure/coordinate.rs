use crate::utils::calculator::Calculate;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64, z: f64) -> Coordinate {
        Coordinate { x, y, z }
    }
    pub fn sub(&self, other: &Coordinate) -> Coordinate {
        Coordinate {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl From<(f64, f64, f64)> for Coordinate {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Coordinate { x, y, z }
    }
}

impl Calculate for Coordinate {
    fn calc_distance(&self, other: &Coordinate) -> f64 {
        self.sub(other).norm()
    }
}

/// Coordinates of one atom serial, one entry per matching line in file order.
/// Multi-model files give one entry per model.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoordinateFrameSeries {
    pub serial: u64,
    pub frames: Vec<Coordinate>,
}

impl CoordinateFrameSeries {
    pub fn new(serial: u64) -> Self {
        CoordinateFrameSeries { serial, frames: Vec::new() }
    }

    pub fn from_frames(serial: u64, frames: Vec<Coordinate>) -> Self {
        CoordinateFrameSeries { serial, frames }
    }

    pub fn push(&mut self, coordinate: Coordinate) {
        self.frames.push(coordinate);
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.frames.iter()
    }
}

/// One distance per paired frame.
pub type DistanceSeries = Vec<f64>;
