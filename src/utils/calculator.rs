pub trait Calculate {
    fn calc_distance(&self, other: &Self) -> f64;
}
