//! Scene composition: the three tower columns and every disk, drawn
//! through the canvas primitives. Each shape clears its own region
//! first, then strokes its outline, then floods its interior, so the
//! fill boundary is always the stroke just drawn.

use crate::display::{Canvas, CornerRadii};
use crate::game::{layout, Disk, GameState};
use crate::theme::Theme;

/// Redraw the whole board from scratch.
pub fn draw_frame(canvas: &mut Canvas, state: &GameState, theme: &Theme) {
    canvas.clear();
    draw_towers(canvas, theme);
    for tower in state.towers() {
        for disk in tower {
            draw_disk(canvas, disk, theme);
        }
    }
}

/// Standing posts and base slabs for all three columns.
fn draw_towers(canvas: &mut Canvas, theme: &Theme) {
    let radii = CornerRadii::top(theme.tower_corner_radius);
    for tower in 0..3 {
        let (x, y, w, h) = layout::standing_tower_rect(tower);
        canvas.clear_rect(x, y, w, h);
        canvas.draw_rounded_rect(
            x,
            y,
            w,
            h,
            &theme.tower_stroke,
            theme.tower_stroke_weight,
            Some(theme.tower_fill.as_str()),
            radii,
        );

        // Base slab: outline first, then fill seeded inside it
        let (bx, by, bw, bh) = layout::base_rect(tower);
        canvas.clear_rect(bx, by, bw, bh);
        canvas.draw_rounded_rect(
            bx,
            by,
            bw,
            bh,
            &theme.base_stroke,
            theme.tower_stroke_weight,
            None,
            radii,
        );
        let (sx, sy) = layout::base_fill_seed(tower);
        canvas.flood_fill(sx, sy, &theme.base_fill);
    }
}

/// One disk as a stroked, filled rounded rect; drag positions are
/// real-valued and floored here.
fn draw_disk(canvas: &mut Canvas, disk: &Disk, theme: &Theme) {
    let x = disk.x.floor() as i32;
    let y = disk.y.floor() as i32;
    canvas.clear_rect(x, y, disk.width, disk.height);
    canvas.draw_rounded_rect(
        x,
        y,
        disk.width,
        disk.height,
        &theme.disk_stroke,
        theme.disk_stroke_weight,
        Some(disk.color.as_str()),
        CornerRadii::uniform(theme.disk_corner_radius),
    );
}
