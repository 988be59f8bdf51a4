mod parallelepiped_queries;
mod quaternion_rotations;
mod shape_distances;
mod vector_matrix_ops;
