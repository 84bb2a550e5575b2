//! Decorative "quantum core" scene.
//!
//! The scene is plain DOM with CSS 3D transforms: a glowing core sphere with a
//! wireframe shell, a ring of orbs around it, and a star field behind. Positions are
//! computed here in scene units and converted to pixels; motion (core wobble, ring
//! rotation, star twinkle) is CSS animation in `quantumyou.css`.

use std::f32::consts::TAU;

use dioxus::prelude::*;

pub const ORB_COUNT: usize = 8;
pub const ORBIT_RADIUS: f32 = 3.8;
pub const STAR_COUNT: usize = 140;
const STAR_SEED: u32 = 0x5eed_cafe;

/// Pixels per scene unit.
const UNIT_PX: f32 = 36.0;

const CYAN: &str = "#22D3EE";
const GREEN: &str = "#4ADE80";

/// One orb on the ring, in scene units.
#[derive(Clone, Debug, PartialEq)]
pub struct Orb {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub color: &'static str,
}

impl Orb {
    fn style(&self) -> String {
        format!(
            "transform: translate3d({:.1}px, {:.1}px, {:.1}px); --orb-color: {};",
            self.x * UNIT_PX,
            -self.y * UNIT_PX,
            self.z * UNIT_PX,
            self.color
        )
    }
}

/// Orbs evenly spaced on a horizontal ring, bobbing by `sin(i) / 2`.
pub fn orbit(count: usize, radius: f32) -> Vec<Orb> {
    (0..count)
        .map(|i| {
            let angle = i as f32 / count as f32 * TAU;
            Orb {
                x: angle.cos() * radius,
                y: (i as f32).sin() * 0.5,
                z: angle.sin() * radius,
                color: if i % 2 == 0 { CYAN } else { GREEN },
            }
        })
        .collect()
}

/// A background star, positioned in percent of the scene box.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub left: f32,
    pub top: f32,
    pub size: f32,
    pub delay_ms: u32,
}

impl Star {
    fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; animation-delay: {}ms;",
            self.left, self.top, self.size, self.size, self.delay_ms
        )
    }
}

/// Deterministic star field (xorshift32), identical on every render.
pub fn star_field(count: usize, seed: u32) -> Vec<Star> {
    let mut state = seed.max(1);
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state as f32 / u32::MAX as f32
    };
    (0..count)
        .map(|_| Star {
            left: next() * 100.0,
            top: next() * 100.0,
            size: 1.0 + next() * 2.0,
            delay_ms: (next() * 4000.0) as u32,
        })
        .collect()
}

#[component]
pub fn QuantumScene() -> Element {
    let orbs = use_hook(|| orbit(ORB_COUNT, ORBIT_RADIUS));
    let stars = use_hook(|| star_field(STAR_COUNT, STAR_SEED));

    rsx! {
        div {
            class: "scene",
            div {
                class: "scene-stars",
                for (i, star) in stars.iter().enumerate() {
                    span { key: "{i}", class: "star", style: star.style() }
                }
            }
            div {
                class: "scene-stage",
                div {
                    class: "scene-rig",
                    div {
                        class: "quantum-core",
                        div { class: "core-sphere" }
                        div { class: "core-shell" }
                    }
                    for (i, orb) in orbs.iter().enumerate() {
                        div { key: "{i}", class: "orb", style: orb.style() }
                    }
                }
            }
        }
    }
}
