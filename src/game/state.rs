//! Puzzle state: three towers of disks, the move rules, and the drag
//! lifecycle. Nothing here touches the raster; rendering reads this
//! state each frame.

use serde::Serialize;

use super::layout;

/// One movable disk. The position is real-valued so a drag can track
/// the cursor smoothly; it is floored to pixels at draw time.
#[derive(Debug, Clone)]
pub struct Disk {
    pub x: f32,
    pub y: f32,
    pub width: i32,
    pub height: i32,
    /// CSS color string, resolved by the rasterizer per fill.
    pub color: String,
}

/// One entry of the move log; the width identifies the disk since no
/// two disks share one.
#[derive(Debug, Clone, Serialize)]
pub struct MoveRecord {
    pub disk_width: i32,
    pub from: usize,
    pub to: usize,
}

struct DragState {
    tower: usize,
    origin_x: f32,
    origin_y: f32,
}

pub struct GameState {
    towers: [Vec<Disk>; 3],
    disk_count: usize,
    moves: u32,
    log: Vec<MoveRecord>,
    drag: Option<DragState>,
}

impl GameState {
    pub fn new(disk_count: usize) -> Self {
        let disk_count = disk_count.min(layout::MAX_DISKS);
        Self {
            towers: [layout::init_disks(disk_count, 0), Vec::new(), Vec::new()],
            disk_count,
            moves: 0,
            log: Vec::new(),
            drag: None,
        }
    }

    /// Back to the initial left-tower stack; counter and log reset.
    pub fn restart(&mut self) {
        self.towers = [layout::init_disks(self.disk_count, 0), Vec::new(), Vec::new()];
        self.moves = 0;
        self.log.clear();
        self.drag = None;
    }

    pub fn towers(&self) -> &[Vec<Disk>; 3] {
        &self.towers
    }

    pub fn disk_count(&self) -> usize {
        self.disk_count
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn log(&self) -> &[MoveRecord] {
        &self.log
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Solved when the full stack has crossed to the rightmost tower.
    pub fn is_solved(&self) -> bool {
        self.towers[2].len() == self.disk_count
    }

    /// A disk may land on a tower that is empty or whose top disk is
    /// wider.
    fn is_legal_landing(&self, disk: &Disk, target: usize) -> bool {
        match self.towers[target].last() {
            Some(top) => disk.width < top.width,
            None => true,
        }
    }

    // ========================================================================
    // Drag Lifecycle
    // ========================================================================

    /// Try to pick up the disk under the cursor. Only the top disk of
    /// its tower can be grabbed; the disk stays in its tower's stack
    /// and simply follows the cursor until dropped.
    pub fn try_grab(&mut self, x: f32, y: f32) -> bool {
        if self.drag.is_some() {
            return false;
        }
        let Some(tower) = layout::tower_at(x) else {
            return false;
        };
        let Some(top) = self.towers[tower].last() else {
            return false;
        };
        if !layout::disk_contains(top, x, y) {
            return false;
        }
        self.drag = Some(DragState {
            tower,
            origin_x: top.x,
            origin_y: top.y,
        });
        true
    }

    /// Recenter the dragged disk under the cursor.
    pub fn drag_to(&mut self, x: f32, y: f32) {
        if let Some(drag) = &self.drag {
            let tower = drag.tower;
            if let Some(disk) = self.towers[tower].last_mut() {
                disk.x = x - disk.width as f32 / 2.0;
                disk.y = y - disk.height as f32 / 2.0;
            }
        }
    }

    /// Put the dragged disk back where it was picked up.
    pub fn cancel_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            if let Some(disk) = self.towers[drag.tower].last_mut() {
                disk.x = drag.origin_x;
                disk.y = drag.origin_y;
            }
        }
    }

    /// Drop the dragged disk over the column at `x`. A legal drop onto
    /// a different tower lands the disk and counts a move; anything
    /// else snaps it back to its origin.
    pub fn drop_at(&mut self, x: f32) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        let source = drag.tower;

        let landing = layout::tower_at(x).filter(|&target| {
            target != source
                && self
                    .towers[source]
                    .last()
                    .is_some_and(|disk| self.is_legal_landing(disk, target))
        });

        match landing {
            Some(target) => {
                let Some(mut disk) = self.towers[source].pop() else {
                    return;
                };
                let (dx, dy) = layout::landing_position(target, self.towers[target].len(), &disk);
                disk.x = dx;
                disk.y = dy;
                self.record_move(disk.width, source, target);
                self.towers[target].push(disk);
            },
            None => {
                if let Some(disk) = self.towers[source].last_mut() {
                    disk.x = drag.origin_x;
                    disk.y = drag.origin_y;
                }
            },
        }
    }

    // ========================================================================
    // Scripted Moves
    // ========================================================================

    /// Move the top disk from one tower to another, as the solver
    /// replay does. Returns false when the source tower is empty.
    pub fn apply_move(&mut self, from: usize, to: usize) -> bool {
        if from > 2 || to > 2 || from == to {
            return false;
        }
        let Some(mut disk) = self.towers[from].pop() else {
            return false;
        };
        let (x, y) = layout::landing_position(to, self.towers[to].len(), &disk);
        disk.x = x;
        disk.y = y;
        self.record_move(disk.width, from, to);
        self.towers[to].push(disk);
        true
    }

    fn record_move(&mut self, disk_width: i32, from: usize, to: usize) {
        self.moves += 1;
        self.log.push(MoveRecord {
            disk_width,
            from,
            to,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_stacks_left_tower() {
        let state = GameState::new(5);
        assert_eq!(state.towers()[0].len(), 5);
        assert!(state.towers()[1].is_empty());
        assert!(state.towers()[2].is_empty());
        assert_eq!(state.moves(), 0);
        assert!(!state.is_solved());
    }

    #[test]
    fn test_disk_count_capped() {
        let state = GameState::new(20);
        assert_eq!(state.disk_count(), layout::MAX_DISKS);
    }

    #[test]
    fn test_grab_only_top_disk() {
        let mut state = GameState::new(3);
        // Bottom disk is covered; grabbing at its row must fail
        let bottom = state.towers()[0][0].clone();
        assert!(!state.try_grab(
            bottom.x + 1.0,
            bottom.y + bottom.height as f32 / 2.0
        ));
        // Top disk grabs fine
        let top = state.towers()[0][2].clone();
        assert!(state.try_grab(
            top.x + top.width as f32 / 2.0,
            top.y + top.height as f32 / 2.0
        ));
        assert!(state.is_dragging());
    }

    #[test]
    fn test_grab_empty_tower_fails() {
        let mut state = GameState::new(3);
        assert!(!state.try_grab(layout::tower_center_x(1) as f32, 300.0));
    }

    #[test]
    fn test_legal_drop_counts_move_and_logs() {
        let mut state = GameState::new(3);
        let top = state.towers()[0][2].clone();
        let cx = top.x + top.width as f32 / 2.0;
        let cy = top.y + top.height as f32 / 2.0;
        assert!(state.try_grab(cx, cy));
        state.drag_to(layout::tower_center_x(2) as f32, 100.0);
        state.drop_at(layout::tower_center_x(2) as f32);

        assert_eq!(state.towers()[0].len(), 2);
        assert_eq!(state.towers()[2].len(), 1);
        assert_eq!(state.moves(), 1);
        assert_eq!(state.log().len(), 1);
        assert_eq!(state.log()[0].from, 0);
        assert_eq!(state.log()[0].to, 2);
        // Landed disk snaps to the stack position, not the cursor
        let landed = &state.towers()[2][0];
        assert_eq!(landed.y as i32, layout::stack_base_y() - landed.height);
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_illegal_drop_restores_origin() {
        let mut state = GameState::new(3);
        // Move the top (smallest) disk to tower 1
        assert!(state.apply_move(0, 1));
        // Now grab tower 0's top and try to drop it on the smaller disk
        let top = state.towers()[0][1].clone();
        assert!(state.try_grab(
            top.x + top.width as f32 / 2.0,
            top.y + top.height as f32 / 2.0
        ));
        state.drag_to(layout::tower_center_x(1) as f32, 100.0);
        state.drop_at(layout::tower_center_x(1) as f32);

        assert_eq!(state.towers()[0].len(), 2);
        assert_eq!(state.towers()[1].len(), 1);
        // Only the scripted move was counted
        assert_eq!(state.moves(), 1);
        let restored = state.towers()[0].last().unwrap();
        assert_eq!(restored.x, top.x);
        assert_eq!(restored.y, top.y);
    }

    #[test]
    fn test_drop_on_same_tower_is_not_a_move() {
        let mut state = GameState::new(3);
        let top = state.towers()[0][2].clone();
        assert!(state.try_grab(
            top.x + top.width as f32 / 2.0,
            top.y + top.height as f32 / 2.0
        ));
        state.drag_to(top.x, top.y - 50.0);
        state.drop_at(layout::tower_center_x(0) as f32);
        assert_eq!(state.moves(), 0);
        assert_eq!(state.towers()[0].len(), 3);
    }

    #[test]
    fn test_cancel_drag_restores_origin() {
        let mut state = GameState::new(2);
        let top = state.towers()[0][1].clone();
        assert!(state.try_grab(
            top.x + top.width as f32 / 2.0,
            top.y + top.height as f32 / 2.0
        ));
        state.drag_to(500.0, 50.0);
        state.cancel_drag();
        let restored = state.towers()[0].last().unwrap();
        assert_eq!(restored.x, top.x);
        assert_eq!(restored.y, top.y);
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_solved_when_all_disks_on_right() {
        let mut state = GameState::new(1);
        assert!(state.apply_move(0, 2));
        assert!(state.is_solved());
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = GameState::new(3);
        state.apply_move(0, 2);
        state.apply_move(0, 1);
        state.restart();
        assert_eq!(state.towers()[0].len(), 3);
        assert!(state.towers()[1].is_empty());
        assert!(state.towers()[2].is_empty());
        assert_eq!(state.moves(), 0);
        assert!(state.log().is_empty());
    }

    #[test]
    fn test_apply_move_empty_source_fails() {
        let mut state = GameState::new(2);
        assert!(!state.apply_move(1, 2));
        assert!(!state.apply_move(0, 0));
    }
}
