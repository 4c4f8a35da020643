// Allow unused code for the parts of the drawing API not exercised
// by the game shell
#![allow(dead_code)]

mod color;
mod display;
mod game;
mod render;
mod theme;

use std::time::Instant;

use display::{Display, InputEvent, MouseButtonKind, RenderTarget};
use game::{layout, GameState};
use sdl2::keyboard::Keycode;
use theme::Theme;

/// One solver move lands per interval during an auto-solve replay.
const SOLVE_STEP_SECS: f32 = 1.0;

const DEFAULT_DISKS: usize = 5;

/// A precomputed solution being replayed move by move.
struct Replay {
    moves: Vec<(usize, usize)>,
    next: usize,
    elapsed: f32,
}

/// Parse command line arguments and return
/// (width, height, disks, vsync, theme path)
fn parse_args() -> (u32, u32, usize, bool, String) {
    let args: Vec<String> = std::env::args().collect();
    let mut width = layout::BOARD_WIDTH;
    let mut height = layout::BOARD_HEIGHT;
    let mut disks = DEFAULT_DISKS;
    let mut vsync = true;
    let mut theme_path = String::from("theme.json");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--no-vsync" => vsync = false,
            "--width" | "-w" => {
                if i + 1 < args.len() {
                    if let Ok(w) = args[i + 1].parse::<u32>() {
                        width = w;
                    }
                    i += 1;
                }
            },
            "--height" | "-h" => {
                if i + 1 < args.len() {
                    if let Ok(h) = args[i + 1].parse::<u32>() {
                        height = h;
                    }
                    i += 1;
                }
            },
            "--resolution" | "-r" => {
                if i + 1 < args.len() {
                    // Parse WxH format (e.g., 1280x600)
                    let parts: Vec<&str> = args[i + 1].split('x').collect();
                    if parts.len() == 2 {
                        if let (Ok(w), Ok(h)) = (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
                            width = w;
                            height = h;
                        }
                    }
                    i += 1;
                }
            },
            "--disks" | "-d" => {
                if i + 1 < args.len() {
                    if let Ok(n) = args[i + 1].parse::<usize>() {
                        disks = n.clamp(1, layout::MAX_DISKS);
                    }
                    i += 1;
                }
            },
            "--theme" | "-t" => {
                if i + 1 < args.len() {
                    theme_path = args[i + 1].clone();
                    i += 1;
                }
            },
            "--help" => {
                println!("Usage: hanoi [OPTIONS]");
                println!();
                println!("Options:");
                println!(
                    "  --width W, -w W       Set window width (default: {})",
                    layout::BOARD_WIDTH
                );
                println!(
                    "  --height H, -h H      Set window height (default: {})",
                    layout::BOARD_HEIGHT
                );
                println!("  --resolution WxH, -r WxH  Set resolution (e.g., 1280x600)");
                println!(
                    "  --disks N, -d N       Number of disks, 1-{} (default: {})",
                    layout::MAX_DISKS,
                    DEFAULT_DISKS
                );
                println!("  --theme FILE, -t FILE Theme file (default: theme.json)");
                println!("  --no-vsync            Disable VSync for uncapped framerate");
                println!("  --help                Show this help message");
                std::process::exit(0);
            },
            _ => {},
        }
        i += 1;
    }

    (width, height, disks, vsync, theme_path)
}

fn main() -> Result<(), String> {
    let (width, height, disk_count, vsync, theme_path) = parse_args();

    // Load theme or fall back to the built-in look
    let theme = Theme::load(&theme_path).unwrap_or_default();
    let background = color::parse(&theme.background);

    let (mut display, texture_creator) = Display::with_options("hanoi", width, height, vsync)?;
    let mut target = RenderTarget::with_size(&texture_creator, width, height)?;
    let mut canvas = display::Canvas::new(width, height);

    let mut state = GameState::new(disk_count);
    let mut replay: Option<Replay> = None;
    let mut announced = false;

    println!("=== hanoi ===");
    println!("Resolution: {}x{}, {} disks", width, height, disk_count);
    if vsync {
        println!("VSync: ON (60fps locked). Use --no-vsync for uncapped.");
    } else {
        println!("VSync: OFF (uncapped framerate)");
    }
    println!("Use --help for command line options.");
    println!("Controls:");
    println!("  Drag & drop - Move the top disk of a tower");
    println!("  S           - Start/stop the auto-solver");
    println!("  R           - Restart");
    println!("  M           - Save the move log to moves.json");
    println!("  T           - Save the current theme to {}", theme_path);
    println!("  Escape      - Quit");

    let mut last_frame = Instant::now();

    'main: loop {
        let now = Instant::now();
        let dt = (now - last_frame).as_secs_f32();
        last_frame = now;

        for event in display.poll_events() {
            match event {
                InputEvent::Quit => break 'main,
                InputEvent::KeyDown(key) => match key {
                    Keycode::Escape => break 'main,
                    Keycode::R => {
                        replay = None;
                        announced = false;
                        state.restart();
                    },
                    Keycode::S => {
                        if replay.is_some() {
                            replay = None;
                            println!("Auto-solve stopped.");
                        } else {
                            announced = false;
                            state.restart();
                            let moves = game::solve(state.disk_count(), 0, 1, 2);
                            println!("Auto-solving in {} moves...", moves.len());
                            // First move lands on the next frame
                            replay = Some(Replay {
                                moves,
                                next: 0,
                                elapsed: SOLVE_STEP_SECS,
                            });
                        }
                    },
                    Keycode::M => match save_move_log(&state, "moves.json") {
                        Ok(()) => println!("Move log saved to moves.json"),
                        Err(e) => eprintln!("Failed to save move log: {}", e),
                    },
                    Keycode::T => match theme.save(&theme_path) {
                        Ok(()) => println!("Theme saved to {}", theme_path),
                        Err(e) => eprintln!("Failed to save theme: {}", e),
                    },
                    _ => {},
                },
                InputEvent::MouseDown {
                    x,
                    y,
                    button: MouseButtonKind::Left,
                } => {
                    // Manual moves are disabled while the solver runs
                    if replay.is_none() {
                        state.try_grab(x as f32, y as f32);
                    }
                },
                InputEvent::MouseMove { x, y } => {
                    if state.is_dragging() {
                        state.drag_to(x as f32, y as f32);
                    }
                },
                InputEvent::MouseUp {
                    x,
                    button: MouseButtonKind::Left,
                    ..
                } => {
                    if state.is_dragging() {
                        state.drop_at(x as f32);
                    }
                },
                InputEvent::MouseLeave => state.cancel_drag(),
                _ => {},
            }
        }

        // Replay the precomputed solution, one move per step interval
        if let Some(r) = &mut replay {
            r.elapsed += dt;
            while r.elapsed >= SOLVE_STEP_SECS && r.next < r.moves.len() {
                r.elapsed -= SOLVE_STEP_SECS;
                let (from, to) = r.moves[r.next];
                state.apply_move(from, to);
                r.next += 1;
            }
            if r.next >= r.moves.len() {
                replay = None;
            }
        }

        if state.is_solved() && !announced {
            println!("Solved in {} moves!", state.moves());
            announced = true;
        }

        render::draw_frame(&mut canvas, &state, &theme);
        display.present(&mut target, &canvas, background)?;
    }

    Ok(())
}

fn save_move_log(state: &GameState, path: &str) -> Result<(), String> {
    let json = serde_json::to_string_pretty(state.log()).map_err(|e| e.to_string())?;
    std::fs::write(path, json).map_err(|e| e.to_string())
}
