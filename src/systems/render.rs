//! Scene rendering.
//!
//! Draws the ground grid and every pawn as a capsule through the
//! [`ActiveCamera`], then the stamina bar of the player pawn. When
//! [`DebugMode`] is present a text overlay shows the pawn's dash, speed and
//! control rotation, and capsules get wireframes plus a velocity line.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::character::get_dash_stamina_rate;
use crate::components::capsule::CapsuleCollider;
use crate::components::charactermovement::CharacterMovement;
use crate::components::controller::Controller;
use crate::components::dash::{Dash, DashMode};
use crate::components::inputcontrolled::PlayerCharacter;
use crate::components::rotation::Rotation;
use crate::components::worldposition::WorldPosition;
use crate::resources::camera3d::ActiveCamera;
use crate::resources::debugmode::DebugMode;

const GRID_SLICES: i32 = 40;
const GRID_SPACING: f32 = 100.0;
const CAPSULE_SLICES: i32 = 16;

const BAR_WIDTH: i32 = 200;
const BAR_HEIGHT: i32 = 16;
const BAR_MARGIN: i32 = 20;

type PawnView = (
    &'static WorldPosition,
    &'static Rotation,
    &'static CapsuleCollider,
    &'static Dash,
    &'static CharacterMovement,
    Option<&'static Controller>,
);

pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    camera: Res<ActiveCamera>,
    pawns: Query<PawnView, With<PlayerCharacter>>,
    debug: Option<Res<DebugMode>>,
) {
    let screen_h = rl.get_screen_height();
    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::RAYWHITE);

    {
        let mut d3 = d.begin_mode3D(camera.0);
        d3.draw_grid(GRID_SLICES, GRID_SPACING);
        for (position, rotation, capsule, dash, movement, _) in pawns.iter() {
            let color = if dash.is_boosting() {
                Color::ORANGE
            } else {
                Color::SKYBLUE
            };
            draw_capsule(&mut d3, position.pos, capsule, color);

            // facing
            let nose = position.pos + rotation.0.yaw_only().forward() * (capsule.radius * 2.0);
            d3.draw_line_3D(position.pos, nose, Color::RED);

            if debug.is_some() {
                let bottom = Vector3::new(
                    position.pos.x,
                    position.pos.y - capsule.half_height,
                    position.pos.z,
                );
                d3.draw_cylinder_wires(
                    bottom,
                    capsule.radius,
                    capsule.radius,
                    capsule.half_height * 2.0,
                    CAPSULE_SLICES,
                    Color::DARKGREEN,
                );
                d3.draw_line_3D(position.pos, position.pos + movement.velocity * 0.25, Color::GREEN);
            }
        }
    }

    let Some((_, _, _, dash, movement, controller)) = pawns.iter().next() else {
        return;
    };

    draw_stamina_bar(&mut d, dash, screen_h);

    if debug.is_some() {
        let mode = match dash.mode() {
            DashMode::Dashing => "dashing",
            DashMode::NotDashing => "walking",
        };
        d.draw_text(
            "DEBUG MODE (press F11 to toggle)",
            10,
            10,
            10,
            Color::BLACK,
        );
        let fps = d.get_fps();
        d.draw_text(&format!("FPS: {}", fps), 10, 25, 10, Color::BLACK);
        let text = format!(
            "Dash: {} | stamina {:.2}/{:.2} | x{:.2}",
            mode,
            dash.stamina(),
            dash.max_stamina(),
            dash.multiplier()
        );
        d.draw_text(&text, 10, 40, 10, Color::BLACK);
        let text = format!(
            "Speed: {:.1} / {:.1} | accel {:.1}",
            movement.ground_speed(),
            movement.max_walk_speed,
            movement.max_acceleration
        );
        d.draw_text(&text, 10, 55, 10, Color::BLACK);
        let text = match controller {
            Some(c) => {
                let r = c.control_rotation();
                format!("Control rotation: pitch {:.1} yaw {:.1}", r.pitch, r.yaw)
            }
            None => "Control rotation: no controller".to_string(),
        };
        d.draw_text(&text, 10, 70, 10, Color::BLACK);
    }
}

fn draw_capsule<D: RaylibDraw3D>(d3: &mut D, center: Vector3, capsule: &CapsuleCollider, color: Color) {
    let offset = capsule.half_height - capsule.radius;
    let bottom = Vector3::new(center.x, center.y - offset, center.z);
    let top = Vector3::new(center.x, center.y + offset, center.z);
    d3.draw_cylinder(
        bottom,
        capsule.radius,
        capsule.radius,
        capsule.cylinder_height(),
        CAPSULE_SLICES,
        color,
    );
    d3.draw_sphere(bottom, capsule.radius, color);
    d3.draw_sphere(top, capsule.radius, color);
}

fn draw_stamina_bar(d: &mut RaylibDrawHandle, dash: &Dash, screen_h: i32) {
    let rate = get_dash_stamina_rate(dash).clamp(0.0, 1.0);
    let y = screen_h - BAR_MARGIN - BAR_HEIGHT;
    let fill = (BAR_WIDTH as f32 * rate) as i32;
    let color = if dash.is_boosting() {
        Color::ORANGE
    } else {
        Color::GOLD
    };
    d.draw_rectangle(BAR_MARGIN, y, BAR_WIDTH, BAR_HEIGHT, Color::LIGHTGRAY);
    d.draw_rectangle(BAR_MARGIN, y, fill, BAR_HEIGHT, color);
    d.draw_rectangle_lines(BAR_MARGIN, y, BAR_WIDTH, BAR_HEIGHT, Color::DARKGRAY);
    d.draw_text("STAMINA", BAR_MARGIN, y - 14, 10, Color::DARKGRAY);
}
