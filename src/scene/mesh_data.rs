//! Vertex tables for the desk scene meshes.
//!
//! Each row is position (3), normal (3), texture coordinate (2). All meshes
//! are non-indexed triangle lists.

pub(crate) const BASE: &[[f32; 8]] = &[
    [-5.0, -0.51, -5.0, 0.0, 1.0, 0.0, 0.0, 0.0],
    [-5.0, -0.51, 5.0, 0.0, 1.0, 0.0, 0.0, 1.0],
    [5.0, -0.51, 5.0, 0.0, 1.0, 0.0, 1.0, 1.0],
    [5.0, -0.51, 5.0, 0.0, 1.0, 0.0, 1.0, 1.0],
    [5.0, -0.51, -5.0, 0.0, 1.0, 0.0, 1.0, 0.0],
    [-5.0, -0.51, -5.0, 0.0, 1.0, 0.0, 0.0, 0.0],
];

pub(crate) const BOOK: &[[f32; 8]] = &[
    [1.5, 0.0, 0.5, 0.0, 1.0, 0.0, 0.0, 0.0],
    [-1.5, 0.0, 0.5, 0.0, 1.0, 0.0, 0.0, 0.4],
    [1.5, 0.0, -1.5, 0.0, 1.0, 0.0, 0.24, 0.0],
    [-1.5, 0.0, 0.5, 0.0, 1.0, 0.0, 0.0, 0.4],
    [1.5, 0.0, -1.5, 0.0, 1.0, 0.0, 0.24, 0.0],
    [-1.5, 0.0, -1.5, 0.0, 1.0, 0.0, 0.24, 0.4],
    [1.5, 0.0, 0.5, 1.0, 0.0, 0.0, 0.3, 0.0],
    [1.5, -0.5, 0.5, 1.0, 0.0, 0.0, 0.245, 0.0],
    [-1.5, -0.5, 0.5, 1.0, 0.0, 0.0, 0.245, 0.4],
    [-1.5, -0.5, 0.5, 1.0, 0.0, 0.0, 0.245, 0.4],
    [-1.5, 0.0, 0.5, 1.0, 0.0, 0.0, 0.3, 0.4],
    [1.5, 0.0, 0.5, 1.0, 0.0, 0.0, 0.3, 0.0],
    [1.5, 0.0, 0.5, 0.0, 0.0, 1.0, 0.4, 0.0],
    [1.5, -0.5, 0.5, 0.0, 0.0, 1.0, 0.31, 0.0],
    [1.5, -0.5, -1.5, 0.0, 0.0, 1.0, 0.31, 0.4],
    [1.5, -0.5, -1.5, 0.0, 0.0, 1.0, 0.31, 0.4],
    [1.5, 0.0, -1.5, 0.0, 0.0, 1.0, 0.4, 0.4],
    [1.5, 0.0, 0.5, 0.0, 0.0, 1.0, 0.4, 0.0],
    [1.5, -0.5, -1.5, -1.0, 0.0, 0.0, 0.4, 0.0],
    [1.5, 0.0, -1.5, -1.0, 0.0, 0.0, 0.31, 0.0],
    [-1.5, 0.0, -1.5, -1.0, 0.0, 0.0, 0.31, 0.4],
    [-1.5, 0.0, -1.5, -1.0, 0.0, 0.0, 0.31, 0.4],
    [-1.5, -0.5, -1.5, -1.0, 0.0, 0.0, 0.4, 0.4],
    [1.5, -0.5, -1.5, -1.0, 0.0, 0.0, 0.4, 0.0],
    [-1.5, 0.0, -1.5, 0.0, 0.0, -1.0, 0.31, 0.0],
    [-1.5, -0.5, -1.5, 0.0, 0.0, -1.0, 0.4, 0.0],
    [-1.5, 0.0, 0.5, 0.0, 0.0, -1.0, 0.31, 0.4],
    [-1.5, 0.0, 0.5, 0.0, 0.0, -1.0, 0.31, 0.4],
    [-1.5, -0.5, 0.5, 0.0, 0.0, -1.0, 0.4, 0.4],
    [-1.5, -0.5, -1.5, 0.0, 0.0, -1.0, 0.4, 0.0],
];

pub(crate) const BALL: &[[f32; 8]] = &[
    [4.06586, 0.0, -4.06586, 0.357407, 0.357407, -0.862856, 0.0, 0.75],
    [-2.513400e-07, -0.0, -5.75, 0.357407, 0.357407, -0.862856, 0.0, 1.0],
    [-1.777250e-07, 4.06586, -4.06586, 0.357407, 0.357407, -0.862856, 0.25, 0.75],
    [-1.777250e-07, 4.06586, -4.06586, -0.357407, 0.357407, -0.862856, 0.25, 0.75],
    [1.098640e-14, -2.513400e-07, -5.75, -0.357407, 0.357407, -0.862856, 0.25, 1.0],
    [-4.06586, -3.554490e-07, -4.06586, -0.357407, 0.357407, -0.862856, 0.5, 0.75],
    [-4.06586, -3.554490e-07, -4.06586, -0.357407, -0.357407, -0.862856, 0.5, 0.75],
    [2.513400e-07, 2.197290e-14, -5.75, -0.357407, -0.357407, -0.862856, 0.5, 1.0],
    [4.848490e-08, -4.06586, -4.06586, -0.357407, -0.357407, -0.862856, 0.75, 0.75],
    [4.848490e-08, -4.06586, -4.06586, 0.357407, -0.357407, -0.862856, 0.75, 0.75],
    [-2.997210e-15, 2.513400e-07, -5.75, 0.357407, -0.357407, -0.862856, 0.75, 1.0],
    [4.06586, 7.108980e-07, -4.06586, 0.357407, -0.357407, -0.862856, 1.0, 0.75],
    [-2.513400e-07, -0.0, 5.75, 0.357407, 0.357407, 0.862856, 0.0, 0.0],
    [4.06586, 0.0, 4.06586, 0.357407, 0.357407, 0.862856, 0.0, 0.25],
    [-1.777250e-07, 4.06586, 4.06586, 0.357407, 0.357407, 0.862856, 0.25, 0.25],
    [1.098640e-14, -2.513400e-07, 5.75, -0.357407, 0.357407, 0.862856, 0.25, 0.0],
    [-1.777250e-07, 4.06586, 4.06586, -0.357407, 0.357407, 0.862856, 0.25, 0.25],
    [-4.06586, -3.554490e-07, 4.06586, -0.357407, 0.357407, 0.862856, 0.5, 0.25],
    [2.513400e-07, 2.197290e-14, 5.75, -0.357407, -0.357407, 0.862856, 0.5, 0.0],
    [-4.06586, -3.554490e-07, 4.06586, -0.357407, -0.357407, 0.862856, 0.5, 0.25],
    [4.848490e-08, -4.06586, 4.06586, -0.357407, -0.357407, 0.862856, 0.75, 0.25],
    [-2.997210e-15, 2.513400e-07, 5.75, 0.357407, -0.357407, 0.862856, 0.75, 0.0],
    [4.848490e-08, -4.06586, 4.06586, 0.357407, -0.357407, 0.862856, 0.75, 0.25],
    [4.06586, 7.108980e-07, 4.06586, 0.357407, -0.357407, 0.862856, 1.0, 0.25],
    [4.06586, 0.0, 4.06586, 0.678598, 0.678598, 0.281085, 0.0, 0.25],
    [5.75, 0.0, 0.0, 0.678598, 0.678598, 0.281085, 0.0, 0.5],
    [-1.777250e-07, 4.06586, 4.06586, 0.678598, 0.678598, 0.281085, 0.25, 0.25],
    [5.75, 0.0, 0.0, 0.678598, 0.678598, 0.281085, 0.0, 0.5],
    [-1.777250e-07, 4.06586, 4.06586, 0.678598, 0.678598, 0.281085, 0.25, 0.25],
    [-2.513400e-07, 5.75, 0.0, 0.678598, 0.678598, 0.281085, 0.25, 0.5],
    [-1.777250e-07, 4.06586, 4.06586, -0.678598, 0.678598, 0.281085, 0.25, 0.25],
    [-2.513400e-07, 5.75, 0.0, -0.678598, 0.678598, 0.281085, 0.25, 0.5],
    [-4.06586, -3.554490e-07, 4.06586, -0.678598, 0.678598, 0.281085, 0.5, 0.25],
    [-2.513400e-07, 5.75, 0.0, -0.678598, 0.678598, 0.281085, 0.25, 0.5],
    [-4.06586, -3.554490e-07, 4.06586, -0.678598, 0.678598, 0.281085, 0.5, 0.25],
    [-5.75, -5.026810e-07, 0.0, -0.678598, 0.678598, 0.281085, 0.5, 0.5],
    [-4.06586, -3.554490e-07, 4.06586, -0.678598, -0.678598, 0.281085, 0.5, 0.25],
    [-5.75, -5.026810e-07, 0.0, -0.678598, -0.678598, 0.281085, 0.5, 0.5],
    [4.848490e-08, -4.06586, 4.06586, -0.678598, -0.678598, 0.281085, 0.75, 0.25],
    [-5.75, -5.026810e-07, 0.0, -0.678598, -0.678598, 0.281085, 0.5, 0.5],
    [4.848490e-08, -4.06586, 4.06586, -0.678598, -0.678598, 0.281085, 0.75, 0.25],
    [6.856810e-08, -5.75, 0.0, -0.678598, -0.678598, 0.281085, 0.75, 0.5],
    [4.848490e-08, -4.06586, 4.06586, 0.678598, -0.678598, 0.281085, 0.75, 0.25],
    [6.856810e-08, -5.75, 0.0, 0.678598, -0.678598, 0.281085, 0.75, 0.5],
    [4.06586, 7.108980e-07, 4.06586, 0.678598, -0.678598, 0.281085, 1.0, 0.25],
    [6.856810e-08, -5.75, 0.0, 0.678598, -0.678598, 0.281085, 0.75, 0.5],
    [4.06586, 7.108980e-07, 4.06586, 0.678598, -0.678598, 0.281085, 1.0, 0.25],
    [5.75, 1.005360e-06, 0.0, 0.678598, -0.678598, 0.281085, 1.0, 0.5],
    [5.75, 0.0, 0.0, 0.678598, 0.678598, -0.281085, 0.0, 0.5],
    [4.06586, 0.0, -4.06586, 0.678598, 0.678598, -0.281085, 0.0, 0.75],
    [-2.513400e-07, 5.75, 0.0, 0.678598, 0.678598, -0.281085, 0.25, 0.5],
    [4.06586, 0.0, -4.06586, 0.678598, 0.678598, -0.281085, 0.0, 0.75],
    [-2.513400e-07, 5.75, 0.0, 0.678598, 0.678598, -0.281085, 0.25, 0.5],
    [-1.777250e-07, 4.06586, -4.06586, 0.678598, 0.678598, -0.281085, 0.25, 0.75],
    [-2.513400e-07, 5.75, 0.0, -0.678598, 0.678598, -0.281085, 0.25, 0.5],
    [-1.777250e-07, 4.06586, -4.06586, -0.678598, 0.678598, -0.281085, 0.25, 0.75],
    [-5.75, -5.026810e-07, 0.0, -0.678598, 0.678598, -0.281085, 0.5, 0.5],
    [-1.777250e-07, 4.06586, -4.06586, -0.678598, 0.678598, -0.281085, 0.25, 0.75],
    [-5.75, -5.026810e-07, 0.0, -0.678598, 0.678598, -0.281085, 0.5, 0.5],
    [-4.06586, -3.554490e-07, -4.06586, -0.678598, 0.678598, -0.281085, 0.5, 0.75],
    [-5.75, -5.026810e-07, 0.0, -0.678598, -0.678598, -0.281085, 0.5, 0.5],
    [-4.06586, -3.554490e-07, -4.06586, -0.678598, -0.678598, -0.281085, 0.5, 0.75],
    [6.856810e-08, -5.75, 0.0, -0.678598, -0.678598, -0.281085, 0.75, 0.5],
    [-4.06586, -3.554490e-07, -4.06586, -0.678598, -0.678598, -0.281085, 0.5, 0.75],
    [6.856810e-08, -5.75, 0.0, -0.678598, -0.678598, -0.281085, 0.75, 0.5],
    [4.848490e-08, -4.06586, -4.06586, -0.678598, -0.678598, -0.281085, 0.75, 0.75],
    [6.856810e-08, -5.75, 0.0, 0.678598, -0.678598, -0.281085, 0.75, 0.5],
    [4.848490e-08, -4.06586, -4.06586, 0.678598, -0.678598, -0.281085, 0.75, 0.75],
    [5.75, 1.005360e-06, 0.0, 0.678598, -0.678598, -0.281085, 1.0, 0.5],
    [4.848490e-08, -4.06586, -4.06586, 0.678598, -0.678598, -0.281085, 0.75, 0.75],
    [5.75, 1.005360e-06, 0.0, 0.678598, -0.678598, -0.281085, 1.0, 0.5],
    [4.06586, 7.108980e-07, -4.06586, 0.678598, -0.678598, -0.281085, 1.0, 0.75],
];

pub(crate) const CANDLE: &[[f32; 8]] = &[
    [1.5, 0.0, -1.5, 0.923879, 0.382683, -0.0, 0.0, 1.0],
    [1.5, 0.0, 1.5, 0.923879, 0.382683, -0.0, 0.0, 0.0],
    [1.06066, 1.06066, -1.5, 0.923879, 0.382683, -0.0, 0.125, 1.0],
    [1.5, 0.0, 1.5, 0.923879, 0.382683, -0.0, 0.0, 0.0],
    [1.06066, 1.06066, -1.5, 0.923879, 0.382683, -0.0, 0.125, 1.0],
    [1.06066, 1.06066, 1.5, 0.923879, 0.382683, -0.0, 0.125, 0.0],
    [1.06066, 1.06066, -1.5, 0.382683, 0.92388, -0.0, 0.125, 1.0],
    [1.06066, 1.06066, 1.5, 0.382683, 0.92388, -0.0, 0.125, 0.0],
    [-6.556710e-08, 1.5, -1.5, 0.382683, 0.92388, -0.0, 0.25, 1.0],
    [1.06066, 1.06066, 1.5, 0.382683, 0.92388, -0.0, 0.125, 0.0],
    [-6.556710e-08, 1.5, -1.5, 0.382683, 0.92388, -0.0, 0.25, 1.0],
    [-6.556710e-08, 1.5, 1.5, 0.382683, 0.92388, -0.0, 0.25, 0.0],
    [-6.556710e-08, 1.5, -1.5, -0.382684, 0.92388, 0.0, 0.25, 1.0],
    [-6.556710e-08, 1.5, 1.5, -0.382684, 0.92388, 0.0, 0.25, 0.0],
    [-1.06066, 1.06066, -1.5, -0.382684, 0.92388, 0.0, 0.375, 1.0],
    [-6.556710e-08, 1.5, 1.5, -0.382684, 0.92388, 0.0, 0.25, 0.0],
    [-1.06066, 1.06066, -1.5, -0.382684, 0.92388, 0.0, 0.375, 1.0],
    [-1.06066, 1.06066, 1.5, -0.382684, 0.92388, 0.0, 0.375, 0.0],
    [-1.06066, 1.06066, -1.5, -0.92388, 0.382683, 0.0, 0.375, 1.0],
    [-1.06066, 1.06066, 1.5, -0.92388, 0.382683, 0.0, 0.375, 0.0],
    [-1.5, -1.311340e-07, -1.5, -0.92388, 0.382683, 0.0, 0.5, 1.0],
    [-1.06066, 1.06066, 1.5, -0.92388, 0.382683, 0.0, 0.375, 0.0],
    [-1.5, -1.311340e-07, -1.5, -0.92388, 0.382683, 0.0, 0.5, 1.0],
    [-1.5, -1.311340e-07, 1.5, -0.92388, 0.382683, 0.0, 0.5, 0.0],
    [-1.5, -1.311340e-07, -1.5, -0.92388, -0.382684, 0.0, 0.5, 1.0],
    [-1.5, -1.311340e-07, 1.5, -0.92388, -0.382684, 0.0, 0.5, 0.0],
    [-1.06066, -1.06066, -1.5, -0.92388, -0.382684, 0.0, 0.625, 1.0],
    [-1.5, -1.311340e-07, 1.5, -0.92388, -0.382684, 0.0, 0.5, 0.0],
    [-1.06066, -1.06066, -1.5, -0.92388, -0.382684, 0.0, 0.625, 1.0],
    [-1.06066, -1.06066, 1.5, -0.92388, -0.382684, 0.0, 0.625, 0.0],
    [-1.06066, -1.06066, -1.5, -0.382683, -0.92388, 0.0, 0.625, 1.0],
    [-1.06066, -1.06066, 1.5, -0.382683, -0.92388, 0.0, 0.625, 0.0],
    [1.788730e-08, -1.5, -1.5, -0.382683, -0.92388, 0.0, 0.75, 1.0],
    [-1.06066, -1.06066, 1.5, -0.382683, -0.92388, 0.0, 0.625, 0.0],
    [1.788730e-08, -1.5, -1.5, -0.382683, -0.92388, 0.0, 0.75, 1.0],
    [1.788730e-08, -1.5, 1.5, -0.382683, -0.92388, 0.0, 0.75, 0.0],
    [1.788730e-08, -1.5, -1.5, 0.382684, -0.923879, 0.0, 0.75, 1.0],
    [1.788730e-08, -1.5, 1.5, 0.382684, -0.923879, 0.0, 0.75, 0.0],
    [1.06066, -1.06066, -1.5, 0.382684, -0.923879, 0.0, 0.875, 1.0],
    [1.788730e-08, -1.5, 1.5, 0.382684, -0.923879, 0.0, 0.75, 0.0],
    [1.06066, -1.06066, -1.5, 0.382684, -0.923879, 0.0, 0.875, 1.0],
    [1.06066, -1.06066, 1.5, 0.382684, -0.923879, 0.0, 0.875, 0.0],
    [1.06066, -1.06066, -1.5, 0.92388, -0.382683, 0.0, 0.875, 1.0],
    [1.06066, -1.06066, 1.5, 0.92388, -0.382683, 0.0, 0.875, 0.0],
    [1.5, 2.622680e-07, -1.5, 0.92388, -0.382683, 0.0, 1.0, 1.0],
    [1.06066, -1.06066, 1.5, 0.92388, -0.382683, 0.0, 0.875, 0.0],
    [1.5, 2.622680e-07, -1.5, 0.92388, -0.382683, 0.0, 1.0, 1.0],
    [1.5, 2.622680e-07, 1.5, 0.92388, -0.382683, 0.0, 1.0, 0.0],
];

pub(crate) const TOPPER: &[[f32; 8]] = &[
    [1.6, 0.0, -0.5, 0.92388, 0.382683, -0.0, 0.0, 1.0],
    [1.6, 0.0, 0.5, 0.92388, 0.382683, -0.0, 0.0, 0.0],
    [1.13137, 1.13137, -0.5, 0.92388, 0.382683, -0.0, 0.125, 1.0],
    [1.6, 0.0, 0.5, 0.92388, 0.382683, -0.0, 0.0, 0.0],
    [1.13137, 1.13137, -0.5, 0.92388, 0.382683, -0.0, 0.125, 1.0],
    [1.13137, 1.13137, 0.5, 0.92388, 0.382683, -0.0, 0.125, 0.0],
    [1.13137, 1.13137, -0.5, 0.382683, 0.92388, -0.0, 0.125, 1.0],
    [1.13137, 1.13137, 0.5, 0.382683, 0.92388, -0.0, 0.125, 0.0],
    [-6.993820e-08, 1.6, -0.5, 0.382683, 0.92388, -0.0, 0.25, 1.0],
    [1.13137, 1.13137, 0.5, 0.382683, 0.92388, -0.0, 0.125, 0.0],
    [-6.993820e-08, 1.6, -0.5, 0.382683, 0.92388, -0.0, 0.25, 1.0],
    [-6.993820e-08, 1.6, 0.5, 0.382683, 0.92388, -0.0, 0.25, 0.0],
    [-6.993820e-08, 1.6, -0.5, -0.382683, 0.92388, 0.0, 0.25, 1.0],
    [-6.993820e-08, 1.6, 0.5, -0.382683, 0.92388, 0.0, 0.25, 0.0],
    [-1.13137, 1.13137, -0.5, -0.382683, 0.92388, 0.0, 0.375, 1.0],
    [-6.993820e-08, 1.6, 0.5, -0.382683, 0.92388, 0.0, 0.25, 0.0],
    [-1.13137, 1.13137, -0.5, -0.382683, 0.92388, 0.0, 0.375, 1.0],
    [-1.13137, 1.13137, 0.5, -0.382683, 0.92388, 0.0, 0.375, 0.0],
    [-1.13137, 1.13137, -0.5, -0.92388, 0.382683, 0.0, 0.375, 1.0],
    [-1.13137, 1.13137, 0.5, -0.92388, 0.382683, 0.0, 0.375, 0.0],
    [-1.6, -1.398760e-07, -0.5, -0.92388, 0.382683, 0.0, 0.5, 1.0],
    [-1.13137, 1.13137, 0.5, -0.92388, 0.382683, 0.0, 0.375, 0.0],
    [-1.6, -1.398760e-07, -0.5, -0.92388, 0.382683, 0.0, 0.5, 1.0],
    [-1.6, -1.398760e-07, 0.5, -0.92388, 0.382683, 0.0, 0.5, 0.0],
    [-1.6, -1.398760e-07, -0.5, -0.92388, -0.382684, 0.0, 0.5, 1.0],
    [-1.6, -1.398760e-07, 0.5, -0.92388, -0.382684, 0.0, 0.5, 0.0],
    [-1.13137, -1.13137, -0.5, -0.92388, -0.382684, 0.0, 0.625, 1.0],
    [-1.6, -1.398760e-07, 0.5, -0.92388, -0.382684, 0.0, 0.5, 0.0],
    [-1.13137, -1.13137, -0.5, -0.92388, -0.382684, 0.0, 0.625, 1.0],
    [-1.13137, -1.13137, 0.5, -0.92388, -0.382684, 0.0, 0.625, 0.0],
    [-1.13137, -1.13137, -0.5, -0.382683, -0.923879, 0.0, 0.625, 1.0],
    [-1.13137, -1.13137, 0.5, -0.382683, -0.923879, 0.0, 0.625, 0.0],
    [1.907980e-08, -1.6, -0.5, -0.382683, -0.923879, 0.0, 0.75, 1.0],
    [-1.13137, -1.13137, 0.5, -0.382683, -0.923879, 0.0, 0.625, 0.0],
    [1.907980e-08, -1.6, -0.5, -0.382683, -0.923879, 0.0, 0.75, 1.0],
    [1.907980e-08, -1.6, 0.5, -0.382683, -0.923879, 0.0, 0.75, 0.0],
    [1.907980e-08, -1.6, -0.5, 0.382684, -0.923879, 0.0, 0.75, 1.0],
    [1.907980e-08, -1.6, 0.5, 0.382684, -0.923879, 0.0, 0.75, 0.0],
    [1.13137, -1.13137, -0.5, 0.382684, -0.923879, 0.0, 0.875, 1.0],
    [1.907980e-08, -1.6, 0.5, 0.382684, -0.923879, 0.0, 0.75, 0.0],
    [1.13137, -1.13137, -0.5, 0.382684, -0.923879, 0.0, 0.875, 1.0],
    [1.13137, -1.13137, 0.5, 0.382684, -0.923879, 0.0, 0.875, 0.0],
    [1.13137, -1.13137, -0.5, 0.92388, -0.382683, 0.0, 0.875, 1.0],
    [1.13137, -1.13137, 0.5, 0.92388, -0.382683, 0.0, 0.875, 0.0],
    [1.6, 2.797530e-07, -0.5, 0.92388, -0.382683, 0.0, 1.0, 1.0],
    [1.13137, -1.13137, 0.5, 0.92388, -0.382683, 0.0, 0.875, 0.0],
    [1.6, 2.797530e-07, -0.5, 0.92388, -0.382683, 0.0, 1.0, 1.0],
    [1.6, 2.797530e-07, 0.5, 0.92388, -0.382683, 0.0, 1.0, 0.0],
    [1.6, 0.0, -0.5, 0.92388, 0.382683, -0.0, 0.0, 0.0],
    [1.13137, 1.13137, -0.5, 0.92388, 0.382683, -0.0, 0.0, 1.0],
    [0.0, 0.0, -0.5, 0.92388, 0.382683, -0.0, 1.0, 1.0],
    [1.13137, 1.13137, -0.5, 0.92388, 0.382683, -0.0, 0.0, 0.0],
    [-6.993820e-08, 1.6, -0.5, 0.92388, 0.382683, -0.0, 0.0, 1.0],
    [0.0, 0.0, -0.5, 0.92388, 0.382683, -0.0, 1.0, 1.0],
    [-6.993820e-08, 1.6, -0.5, 0.92388, 0.382683, -0.0, 0.0, 0.0],
    [-1.13137, 1.13137, -0.5, 0.92388, 0.382683, -0.0, 0.0, 1.0],
    [0.0, 0.0, -0.5, 0.92388, 0.382683, -0.0, 1.0, 1.0],
    [-1.13137, 1.13137, -0.5, 0.92388, 0.382683, 0.0, 0.0, 0.0],
    [-1.6, -1.398760e-07, -0.5, 0.92388, 0.382683, 0.0, 0.0, 1.0],
    [0.0, 0.0, -0.5, 0.92388, 0.382683, -0.0, 1.0, 1.0],
    [-1.6, -1.398760e-07, -0.5, 0.92388, 0.382683, -0.0, 0.0, 0.0],
    [1.13137, -1.13137, -0.5, 0.92388, 0.382683, -0.0, 0.0, 1.0],
    [0.0, 0.0, -0.5, 0.92388, 0.382683, -0.0, 1.0, 1.0],
    [-1.13137, -1.13137, -0.5, 0.92388, 0.382683, -0.0, 0.0, 0.0],
    [1.907980e-08, -1.6, -0.5, 0.92388, 0.382683, -0.0, 0.0, 1.0],
    [0.0, 0.0, -0.5, 0.92388, 0.382683, -0.0, 1.0, 1.0],
    [1.907980e-08, -1.6, -0.5, 0.92388, 0.382683, -0.0, 0.0, 0.0],
    [1.13137, -1.13137, -0.5, 0.92388, 0.382683, -0.0, 0.0, 1.0],
    [0.0, 0.0, -0.5, 0.92388, 0.382683, -0.0, 1.0, 1.0],
    [1.13137, -1.13137, -0.5, 0.92388, 0.382683, -0.0, 0.0, 0.0],
    [1.6, 2.797530e-07, -0.5, 0.92388, 0.382683, -0.0, 0.0, 1.0],
    [0.0, 0.0, -0.5, 0.92388, 0.382683, -0.0, 1.0, 1.0],
];

pub(crate) const CABLE: &[[f32; 8]] = &[
    [1.6, 0.0, -0.125, 0.92388, 0.382683, -0.0, 0.0, 1.0],
    [1.6, 0.0, 0.125, 0.92388, 0.382683, -0.0, 0.0, 0.0],
    [1.13137, 1.13137, -0.125, 0.92388, 0.382683, -0.0, 0.125, 1.0],
    [1.6, 0.0, 0.125, 0.92388, 0.382683, -0.0, 0.0, 0.0],
    [1.13137, 1.13137, -0.125, 0.92388, 0.382683, -0.0, 0.125, 1.0],
    [1.13137, 1.13137, 0.125, 0.92388, 0.382683, -0.0, 0.125, 0.0],
    [1.13137, 1.13137, -0.125, 0.382683, 0.92388, -0.0, 0.125, 1.0],
    [1.13137, 1.13137, 0.125, 0.382683, 0.92388, -0.0, 0.125, 0.0],
    [-6.993820e-08, 1.6, -0.125, 0.382683, 0.92388, -0.0, 0.25, 1.0],
    [1.13137, 1.13137, 0.125, 0.382683, 0.92388, -0.0, 0.125, 0.0],
    [-6.993820e-08, 1.6, -0.125, 0.382683, 0.92388, -0.0, 0.25, 1.0],
    [-6.993820e-08, 1.6, 0.125, 0.382683, 0.92388, -0.0, 0.25, 0.0],
    [-6.993820e-08, 1.6, -0.125, -0.382683, 0.92388, 0.0, 0.25, 1.0],
    [-6.993820e-08, 1.6, 0.125, -0.382683, 0.92388, 0.0, 0.25, 0.0],
    [-1.13137, 1.13137, -0.125, -0.382683, 0.92388, 0.0, 0.375, 1.0],
    [-6.993820e-08, 1.6, 0.125, -0.382683, 0.92388, 0.0, 0.25, 0.0],
    [-1.13137, 1.13137, -0.125, -0.382683, 0.92388, 0.0, 0.375, 1.0],
    [-1.13137, 1.13137, 0.125, -0.382683, 0.92388, 0.0, 0.375, 0.0],
    [-1.13137, 1.13137, -0.125, -0.92388, 0.382683, 0.0, 0.375, 1.0],
    [-1.13137, 1.13137, 0.125, -0.92388, 0.382683, 0.0, 0.375, 0.0],
    [-1.6, -1.398760e-07, -0.125, -0.92388, 0.382683, 0.0, 0.5, 1.0],
    [-1.13137, 1.13137, 0.125, -0.92388, 0.382683, 0.0, 0.375, 0.0],
    [-1.6, -1.398760e-07, -0.125, -0.92388, 0.382683, 0.0, 0.5, 1.0],
    [-1.6, -1.398760e-07, 0.125, -0.92388, 0.382683, 0.0, 0.5, 0.0],
    [-1.6, -1.398760e-07, -0.125, -0.92388, -0.382684, 0.0, 0.5, 1.0],
    [-1.6, -1.398760e-07, 0.125, -0.92388, -0.382684, 0.0, 0.5, 0.0],
    [-1.13137, -1.13137, -0.125, -0.92388, -0.382684, 0.0, 0.625, 1.0],
    [-1.6, -1.398760e-07, 0.125, -0.92388, -0.382684, 0.0, 0.5, 0.0],
    [-1.13137, -1.13137, -0.125, -0.92388, -0.382684, 0.0, 0.625, 1.0],
    [-1.13137, -1.13137, 0.125, -0.92388, -0.382684, 0.0, 0.625, 0.0],
    [-1.13137, -1.13137, -0.125, -0.382683, -0.923879, 0.0, 0.625, 1.0],
    [-1.13137, -1.13137, 0.125, -0.382683, -0.923879, 0.0, 0.625, 0.0],
    [1.907980e-08, -1.6, -0.125, -0.382683, -0.923879, 0.0, 0.75, 1.0],
    [-1.13137, -1.13137, 0.125, -0.382683, -0.923879, 0.0, 0.625, 0.0],
    [1.907980e-08, -1.6, -0.125, -0.382683, -0.923879, 0.0, 0.75, 1.0],
    [1.907980e-08, -1.6, 0.125, -0.382683, -0.923879, 0.0, 0.75, 0.0],
    [1.907980e-08, -1.6, -0.125, 0.382684, -0.923879, 0.0, 0.75, 1.0],
    [1.907980e-08, -1.6, 0.125, 0.382684, -0.923879, 0.0, 0.75, 0.0],
    [1.13137, -1.13137, -0.125, 0.382684, -0.923879, 0.0, 0.875, 1.0],
    [1.907980e-08, -1.6, 0.125, 0.382684, -0.923879, 0.0, 0.75, 0.0],
    [1.13137, -1.13137, -0.125, 0.382684, -0.923879, 0.0, 0.875, 1.0],
    [1.13137, -1.13137, 0.125, 0.382684, -0.923879, 0.0, 0.875, 0.0],
    [1.13137, -1.13137, -0.125, 0.92388, -0.382683, 0.0, 0.875, 1.0],
    [1.13137, -1.13137, 0.125, 0.92388, -0.382683, 0.0, 0.875, 0.0],
    [1.6, 2.797530e-07, -0.125, 0.92388, -0.382683, 0.0, 1.0, 1.0],
    [1.13137, -1.13137, 0.125, 0.92388, -0.382683, 0.0, 0.875, 0.0],
    [1.6, 2.797530e-07, -0.125, 0.92388, -0.382683, 0.0, 1.0, 1.0],
    [1.6, 2.797530e-07, 0.125, 0.92388, -0.382683, 0.0, 1.0, 0.0],
    [1.75, 0.0, -0.125, 0.92388, 0.382683, -0.0, 0.0, 1.0],
    [1.75, 0.0, 0.125, 0.92388, 0.382683, -0.0, 0.0, 0.0],
    [1.23744, 1.23744, -0.125, 0.92388, 0.382683, -0.0, 0.125, 1.0],
    [1.75, 0.0, 0.125, 0.92388, 0.382683, -0.0, 0.0, 0.0],
    [1.23744, 1.23744, -0.125, 0.92388, 0.382683, -0.0, 0.125, 1.0],
    [1.23744, 1.23744, 0.125, 0.92388, 0.382683, -0.0, 0.125, 0.0],
    [1.23744, 1.23744, -0.125, 0.382683, 0.92388, -0.0, 0.125, 1.0],
    [1.23744, 1.23744, 0.125, 0.382683, 0.92388, -0.0, 0.125, 0.0],
    [-7.649490e-08, 1.75, -0.125, 0.382683, 0.92388, -0.0, 0.25, 1.0],
    [1.23744, 1.23744, 0.125, 0.382683, 0.92388, -0.0, 0.125, 0.0],
    [-7.649490e-08, 1.75, -0.125, 0.382683, 0.92388, -0.0, 0.25, 1.0],
    [-7.649490e-08, 1.75, 0.125, 0.382683, 0.92388, -0.0, 0.25, 0.0],
    [-7.649490e-08, 1.75, -0.125, -0.382683, 0.92388, 0.0, 0.25, 1.0],
    [-7.649490e-08, 1.75, 0.125, -0.382683, 0.92388, 0.0, 0.25, 0.0],
    [-1.23744, 1.23744, -0.125, -0.382683, 0.92388, 0.0, 0.375, 1.0],
    [-7.649490e-08, 1.75, 0.125, -0.382683, 0.92388, 0.0, 0.25, 0.0],
    [-1.23744, 1.23744, -0.125, -0.382683, 0.92388, 0.0, 0.375, 1.0],
    [-1.23744, 1.23744, 0.125, -0.382683, 0.92388, 0.0, 0.375, 0.0],
    [-1.23744, 1.23744, -0.125, -0.92388, 0.382683, 0.0, 0.375, 1.0],
    [-1.23744, 1.23744, 0.125, -0.92388, 0.382683, 0.0, 0.375, 0.0],
    [-1.75, -1.529900e-07, -0.125, -0.92388, 0.382683, 0.0, 0.5, 1.0],
    [-1.23744, 1.23744, 0.125, -0.92388, 0.382683, 0.0, 0.375, 0.0],
    [-1.75, -1.529900e-07, -0.125, -0.92388, 0.382683, 0.0, 0.5, 1.0],
    [-1.75, -1.529900e-07, 0.125, -0.92388, 0.382683, 0.0, 0.5, 0.0],
    [-1.75, -1.529900e-07, -0.125, -0.92388, -0.382684, 0.0, 0.5, 1.0],
    [-1.75, -1.529900e-07, 0.125, -0.92388, -0.382684, 0.0, 0.5, 0.0],
    [-1.23744, -1.23744, -0.125, -0.92388, -0.382684, 0.0, 0.625, 1.0],
    [-1.75, -1.529900e-07, 0.125, -0.92388, -0.382684, 0.0, 0.5, 0.0],
    [-1.23744, -1.23744, -0.125, -0.92388, -0.382684, 0.0, 0.625, 1.0],
    [-1.23744, -1.23744, 0.125, -0.92388, -0.382684, 0.0, 0.625, 0.0],
    [-1.23744, -1.23744, -0.125, -0.382683, -0.923879, 0.0, 0.625, 1.0],
    [-1.23744, -1.23744, 0.125, -0.382683, -0.923879, 0.0, 0.625, 0.0],
    [2.086850e-08, -1.75, -0.125, -0.382683, -0.923879, 0.0, 0.75, 1.0],
    [-1.23744, -1.23744, 0.125, -0.382683, -0.923879, 0.0, 0.625, 0.0],
    [2.086850e-08, -1.75, -0.125, -0.382683, -0.923879, 0.0, 0.75, 1.0],
    [2.086850e-08, -1.75, 0.125, -0.382683, -0.923879, 0.0, 0.75, 0.0],
    [2.086850e-08, -1.75, -0.125, 0.382684, -0.923879, 0.0, 0.75, 1.0],
    [2.086850e-08, -1.75, 0.125, 0.382684, -0.923879, 0.0, 0.75, 0.0],
    [1.23744, -1.23744, -0.125, 0.382684, -0.923879, 0.0, 0.875, 1.0],
    [2.086850e-08, -1.75, 0.125, 0.382684, -0.923879, 0.0, 0.75, 0.0],
    [1.23744, -1.23744, -0.125, 0.382684, -0.923879, 0.0, 0.875, 1.0],
    [1.23744, -1.23744, 0.125, 0.382684, -0.923879, 0.0, 0.875, 0.0],
    [1.23744, -1.23744, -0.125, 0.92388, -0.382683, 0.0, 0.875, 1.0],
    [1.23744, -1.23744, 0.125, 0.92388, -0.382683, 0.0, 0.875, 0.0],
    [1.75, 3.059800e-07, -0.125, 0.92388, -0.382683, 0.0, 1.0, 1.0],
    [1.23744, -1.23744, 0.125, 0.92388, -0.382683, 0.0, 0.875, 0.0],
    [1.75, 3.059800e-07, -0.125, 0.92388, -0.382683, 0.0, 1.0, 1.0],
    [1.75, 3.059800e-07, 0.125, 0.92388, -0.382683, 0.0, 1.0, 0.0],
    [1.75, 0.0, -0.125, 0.92388, 0.382683, -0.0, 0.0, 0.0],
    [1.23744, 1.23744, -0.125, 0.92388, 0.382683, -0.0, 0.0, 1.0],
    [1.6, 0.0, -0.125, 0.92388, 0.382683, -0.0, 1.0, 1.0],
    [1.6, 0.0, -0.125, 0.92388, 0.382683, -0.0, 0.0, 0.0],
    [1.23744, 1.23744, -0.125, 0.92388, 0.382683, -0.0, 0.0, 1.0],
    [1.13137, 1.13137, -0.125, 0.92388, 0.382683, -0.0, 1.0, 1.0],
    [1.23744, 1.23744, -0.125, 0.382683, 0.92388, -0.0, 0.0, 0.0],
    [-7.649490e-08, 1.75, -0.125, 0.382683, 0.92388, -0.0, 0.0, 1.0],
    [1.13137, 1.13137, -0.125, 0.382683, 0.92388, -0.0, 1.0, 1.0],
    [1.13137, 1.13137, -0.125, 0.382683, 0.92388, -0.0, 0.0, 0.0],
    [-7.649490e-08, 1.75, -0.125, 0.382683, 0.92388, -0.0, 0.0, 1.0],
    [-6.993820e-08, 1.6, -0.125, 0.382683, 0.92388, -0.0, 1.0, 1.0],
    [-7.649490e-08, 1.75, -0.125, -0.382683, 0.92388, 0.0, 0.0, 0.0],
    [-1.23744, 1.23744, -0.125, -0.382683, 0.92388, 0.0, 0.0, 1.0],
    [-6.993820e-08, 1.6, -0.125, -0.382683, 0.92388, 0.0, 1.0, 1.0],
    [-6.993820e-08, 1.6, -0.125, -0.382683, 0.92388, 0.0, 0.0, 0.0],
    [-1.23744, 1.23744, -0.125, -0.382683, 0.92388, 0.0, 0.0, 1.0],
    [-1.13137, 1.13137, -0.125, -0.382683, 0.92388, 0.0, 1.0, 1.0],
    [-1.23744, 1.23744, -0.125, -0.92388, 0.382683, 0.0, 0.0, 0.0],
    [-1.75, -1.529900e-07, -0.125, -0.92388, 0.382683, 0.0, 0.0, 1.0],
    [-1.13137, 1.13137, -0.125, -0.92388, 0.382683, 0.0, 1.0, 1.0],
    [-1.13137, 1.13137, -0.125, -0.92388, 0.382683, 0.0, 0.0, 0.0],
    [-1.75, -1.529900e-07, -0.125, -0.92388, 0.382683, 0.0, 0.0, 1.0],
    [-1.6, -1.398760e-07, -0.125, -0.92388, 0.382683, 0.0, 1.0, 1.0],
    [-1.75, -1.529900e-07, -0.125, -0.92388, -0.382684, 0.0, 0.0, 0.0],
    [-1.23744, -1.23744, -0.125, -0.92388, -0.382684, 0.0, 0.0, 1.0],
    [-1.6, -1.398760e-07, -0.125, -0.92388, -0.382684, 0.0, 1.0, 1.0],
    [-1.6, -1.398760e-07, -0.125, -0.92388, -0.382684, 0.0, 0.0, 0.0],
    [-1.23744, -1.23744, -0.125, -0.92388, -0.382684, 0.0, 0.0, 1.0],
    [-1.13137, -1.13137, -0.125, -0.92388, -0.382684, 0.0, 1.0, 1.0],
    [-1.23744, -1.23744, -0.125, -0.382683, -0.923879, 0.0, 0.0, 0.0],
    [2.086850e-08, -1.75, -0.125, -0.382683, -0.923879, 0.0, 0.0, 1.0],
    [-1.13137, -1.13137, -0.125, -0.382683, -0.923879, 0.0, 1.0, 1.0],
    [-1.13137, -1.13137, -0.125, -0.382683, -0.923879, 0.0, 0.0, 0.0],
    [2.086850e-08, -1.75, -0.125, -0.382683, -0.923879, 0.0, 0.0, 1.0],
    [1.907980e-08, -1.6, -0.125, -0.382683, -0.923879, 0.0, 1.0, 1.0],
    [2.086850e-08, -1.75, -0.125, 0.382684, -0.923879, 0.0, 0.0, 0.0],
    [1.23744, -1.23744, -0.125, 0.382684, -0.923879, 0.0, 0.0, 1.0],
    [1.907980e-08, -1.6, -0.125, 0.382684, -0.923879, 0.0, 1.0, 1.0],
    [1.907980e-08, -1.6, -0.125, 0.382684, -0.923879, 0.0, 0.0, 0.0],
    [1.23744, -1.23744, -0.125, 0.382684, -0.923879, 0.0, 0.0, 1.0],
    [1.13137, -1.13137, -0.125, 0.382684, -0.923879, 0.0, 1.0, 1.0],
    [1.23744, -1.23744, -0.125, 0.92388, -0.382683, 0.0, 0.0, 0.0],
    [1.75, 3.059800e-07, -0.125, 0.92388, -0.382683, 0.0, 0.0, 1.0],
    [1.13137, -1.13137, -0.125, 0.92388, -0.382683, 0.0, 1.0, 1.0],
    [1.13137, -1.13137, -0.125, 0.92388, -0.382683, 0.0, 0.0, 0.0],
    [1.75, 3.059800e-07, -0.125, 0.92388, -0.382683, 0.0, 0.0, 1.0],
    [1.6, 2.797530e-07, -0.125, 0.92388, -0.382683, 0.0, 1.0, 1.0],
    [1.6, 0.0, 0.125, 0.92388, 0.382683, -0.0, 0.0, 0.0],
    [1.13137, 1.13137, 0.125, 0.92388, 0.382683, -0.0, 0.0, 1.0],
    [1.75, 0.0, 0.125, 0.92388, 0.382683, -0.0, 1.0, 1.0],
    [1.75, 0.0, 0.125, 0.92388, 0.382683, -0.0, 0.0, 0.0],
    [1.13137, 1.13137, 0.125, 0.92388, 0.382683, -0.0, 0.0, 1.0],
    [1.23744, 1.23744, 0.125, 0.92388, 0.382683, -0.0, 1.0, 1.0],
    [1.23744, 1.23744, 0.125, 0.382683, 0.92388, -0.0, 0.0, 0.0],
    [-7.649490e-08, 1.75, 0.125, 0.382683, 0.92388, -0.0, 0.0, 1.0],
    [1.13137, 1.13137, 0.125, 0.382683, 0.92388, -0.0, 1.0, 1.0],
    [1.13137, 1.13137, 0.125, 0.382683, 0.92388, -0.0, 0.0, 0.0],
    [-7.649490e-08, 1.75, 0.125, 0.382683, 0.92388, -0.0, 0.0, 1.0],
    [-6.993820e-08, 1.6, 0.125, 0.382683, 0.92388, -0.0, 1.0, 1.0],
    [-7.649490e-08, 1.75, 0.125, -0.382683, 0.92388, 0.0, 0.0, 0.0],
    [-1.23744, 1.23744, 0.125, -0.382683, 0.92388, 0.0, 0.0, 1.0],
    [-6.993820e-08, 1.6, 0.125, -0.382683, 0.92388, 0.0, 1.0, 1.0],
    [-6.993820e-08, 1.6, 0.125, -0.382683, 0.92388, 0.0, 0.0, 0.0],
    [-1.23744, 1.23744, 0.125, -0.382683, 0.92388, 0.0, 0.0, 1.0],
    [-1.13137, 1.13137, 0.125, -0.382683, 0.92388, 0.0, 1.0, 1.0],
    [-1.23744, 1.23744, 0.125, -0.92388, 0.382683, 0.0, 0.0, 0.0],
    [-1.75, -1.529900e-07, 0.125, -0.92388, 0.382683, 0.0, 0.0, 1.0],
    [-1.13137, 1.13137, 0.125, -0.92388, 0.382683, 0.0, 1.0, 1.0],
    [-1.13137, 1.13137, 0.125, -0.92388, 0.382683, 0.0, 0.0, 0.0],
    [-1.75, -1.529900e-07, 0.125, -0.92388, 0.382683, 0.0, 0.0, 1.0],
    [-1.6, -1.398760e-07, 0.125, -0.92388, 0.382683, 0.0, 1.0, 1.0],
    [-1.75, -1.529900e-07, 0.125, -0.92388, -0.382684, 0.0, 0.0, 0.0],
    [-1.23744, -1.23744, 0.125, -0.92388, -0.382684, 0.0, 0.0, 1.0],
    [-1.6, -1.398760e-07, 0.125, -0.92388, -0.382684, 0.0, 1.0, 1.0],
    [-1.6, -1.398760e-07, 0.125, -0.92388, -0.382684, 0.0, 0.0, 0.0],
    [-1.23744, -1.23744, 0.125, -0.92388, -0.382684, 0.0, 0.0, 1.0],
    [-1.13137, -1.13137, 0.125, -0.92388, -0.382684, 0.0, 1.0, 1.0],
    [-1.23744, -1.23744, 0.125, -0.382683, -0.923879, 0.0, 0.0, 0.0],
    [2.086850e-08, -1.75, 0.125, -0.382683, -0.923879, 0.0, 0.0, 1.0],
    [-1.13137, -1.13137, 0.125, -0.382683, -0.923879, 0.0, 1.0, 1.0],
    [-1.13137, -1.13137, 0.125, -0.382683, -0.923879, 0.0, 0.0, 0.0],
    [2.086850e-08, -1.75, 0.125, -0.382683, -0.923879, 0.0, 0.0, 1.0],
    [1.907980e-08, -1.6, 0.125, -0.382683, -0.923879, 0.0, 1.0, 1.0],
    [2.086850e-08, -1.75, 0.125, 0.382684, -0.923879, 0.0, 0.0, 0.0],
    [1.23744, -1.23744, 0.125, 0.382684, -0.923879, 0.0, 0.0, 1.0],
    [1.907980e-08, -1.6, 0.125, 0.382684, -0.923879, 0.0, 1.0, 1.0],
    [1.907980e-08, -1.6, 0.125, 0.382684, -0.923879, 0.0, 0.0, 0.0],
    [1.23744, -1.23744, 0.125, 0.382684, -0.923879, 0.0, 0.0, 1.0],
    [1.13137, -1.13137, 0.125, 0.382684, -0.923879, 0.0, 1.0, 1.0],
    [1.23744, -1.23744, 0.125, 0.92388, -0.382683, 0.0, 0.0, 0.0],
    [1.75, 3.059800e-07, 0.125, 0.92388, -0.382683, 0.0, 0.0, 1.0],
    [1.13137, -1.13137, 0.125, 0.92388, -0.382683, 0.0, 1.0, 1.0],
    [1.13137, -1.13137, 0.125, 0.92388, -0.382683, 0.0, 0.0, 0.0],
    [1.75, 3.059800e-07, 0.125, 0.92388, -0.382683, 0.0, 0.0, 1.0],
    [1.6, 2.797530e-07, 0.125, 0.92388, -0.382683, 0.0, 1.0, 1.0],
];

