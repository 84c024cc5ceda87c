//! `pixels` + `egui-wgpu` presenter for the GUI host.

pub mod adapter;
pub mod factory;
pub mod presenter;
