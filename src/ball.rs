//! A ball for animation exercises: a center, a velocity, a radius and a
//! color. It only stores state; moving and drawing it is the caller's job.

use rand::Rng;

/// Red, green and blue channels.
pub type Rgb = (u8, u8, u8);

const VELOCITY_RANGE: std::ops::Range<f64> = 0.01..0.03;
const RADIUS_RANGE: std::ops::Range<f64> = 0.005..0.03;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
  center_x: f64,
  center_y: f64,
  velocity_x: f64,
  velocity_y: f64,
  radius: f64,
  color: Rgb,
}

impl Ball {
  pub fn new(
    center_x: f64,
    center_y: f64,
    velocity_x: f64,
    velocity_y: f64,
    color: Rgb,
    radius: f64,
  ) -> Self {
    Self {
      center_x,
      center_y,
      velocity_x,
      velocity_y,
      radius,
      color,
    }
  }

  /// A ball at the origin with a random velocity, radius and color.
  pub fn random() -> Self {
    Self::random_with(&mut rand::thread_rng())
  }

  pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
    let velocity_x = rng.gen_range(VELOCITY_RANGE);
    let velocity_y = rng.gen_range(VELOCITY_RANGE);
    let color = (
      rng.gen_range(0..=u8::MAX),
      rng.gen_range(0..=u8::MAX),
      rng.gen_range(0..=u8::MAX),
    );
    let radius = rng.gen_range(RADIUS_RANGE);
    log::trace!(
      "Random ball: velocity ({}, {}), radius {}, color {:?}",
      velocity_x,
      velocity_y,
      radius,
      color
    );
    Self::new(0.0, 0.0, velocity_x, velocity_y, color, radius)
  }

  pub fn center_x(&self) -> f64 {
    self.center_x
  }
  pub fn center_y(&self) -> f64 {
    self.center_y
  }
  pub fn velocity_x(&self) -> f64 {
    self.velocity_x
  }
  pub fn velocity_y(&self) -> f64 {
    self.velocity_y
  }
  pub fn radius(&self) -> f64 {
    self.radius
  }
  pub fn color(&self) -> Rgb {
    self.color
  }

  pub fn set_center_x(&mut self, center_x: f64) {
    self.center_x = center_x;
  }
  pub fn set_center_y(&mut self, center_y: f64) {
    self.center_y = center_y;
  }
  pub fn set_velocity_x(&mut self, velocity_x: f64) {
    self.velocity_x = velocity_x;
  }
  pub fn set_velocity_y(&mut self, velocity_y: f64) {
    self.velocity_y = velocity_y;
  }
}

impl Default for Ball {
  fn default() -> Self {
    Self::random()
  }
}
