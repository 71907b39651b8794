pub mod segment_intersection;
