// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

pub mod fk;
pub mod ik;

pub use fk::{forward, ForwardKinematics};
pub use ik::{inverse, InverseKinematics};
