pub(crate) mod body;
pub(crate) mod force;
pub(crate) mod integrator;
pub(crate) mod scenario;
pub(crate) mod system;
pub(crate) mod time_step;
pub(crate) mod trail;
pub(crate) mod units;
