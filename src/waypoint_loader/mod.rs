mod loader;

pub use loader::load_waypoint_sets_from;
