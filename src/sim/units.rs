use nalgebra::Vector2;

pub(crate) type Float = f64;
pub(crate) type Vector = Vector2<Float>;

// Gravitational constant in N m^2 / kg^2
pub(crate) const G: Float = 6.67e-11;
// Astronomical unit in m
pub(crate) const AU: Float = 1.50e11;
pub(crate) const DAY: Float = 60. * 60. * 24.;
pub(crate) const KM_PER_S: Float = 1_000.;

pub(crate) const QUARTER_DAY: Float = DAY / 4.;
pub(crate) const EIGHTH_DAY: Float = DAY / 8.;

/// Default window edge length in pixels.
pub(crate) const DEFAULT_WINDOW_SIZE: Float = 750.;
/// Default number of pixels one astronomical unit spans on screen.
pub(crate) const DEFAULT_PIXELS_PER_AU: Float = 200.;
