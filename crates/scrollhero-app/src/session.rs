use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use scrollhero_core::input::TickInput;
use scrollhero_game::frame::{self, Frame};
use scrollhero_game::{GameConfig, GameStatus, World};

/// Commands sent from the input source to the session tick loop.
#[derive(Debug)]
pub enum SessionCommand {
    Input(TickInput),
    Quit,
}

/// Broadcasts sent from the session tick loop to the renderer.
#[derive(Debug, Clone)]
pub enum SessionBroadcast {
    Frame(Frame),
    /// Signal that the session has ended and the loop has exited.
    Ended,
}

/// Spawn a session tick loop as a tokio task.
/// Returns the command sender and broadcast receiver.
pub fn spawn_session(
    config: GameConfig,
    seed: u64,
) -> (
    mpsc::UnboundedSender<SessionCommand>,
    mpsc::UnboundedReceiver<SessionBroadcast>,
    JoinHandle<()>,
) {
    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
    let (broadcast_tx, broadcast_rx) = mpsc::unbounded_channel();

    let handle = tokio::spawn(async move {
        run_session(config, seed, cmd_rx, broadcast_tx).await;
    });

    (cmd_tx, broadcast_rx, handle)
}

/// The session tick loop: fixed-rate world ticks driven by a tokio
/// interval, with input reports folded into a pending snapshot between
/// ticks. Level transitions and game over pause in real time while the
/// simulation clock stands still.
async fn run_session(
    config: GameConfig,
    seed: u64,
    mut cmd_rx: mpsc::UnboundedReceiver<SessionCommand>,
    broadcast_tx: mpsc::UnboundedSender<SessionBroadcast>,
) {
    let mut world = World::new(config);
    let mut rng = StdRng::seed_from_u64(seed);
    world.start_new_level(&mut rng);

    let tick_interval = Duration::from_secs_f32(1.0 / world.config.tick_rate_hz);
    let mut interval = tokio::time::interval(tick_interval);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let mut pending = TickInput::default();

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let input = std::mem::take(&mut pending);
                let events = world.tick(&input);
                for event in &events {
                    tracing::debug!(?event, "tick event");
                }

                match world.status {
                    GameStatus::Running => {
                        let _ = broadcast_tx.send(SessionBroadcast::Frame(
                            frame::snapshot(&world, None),
                        ));
                    },
                    GameStatus::LevelTransition => {
                        let banner = format!("Level {} Completed!", world.level);
                        let _ = broadcast_tx.send(SessionBroadcast::Frame(
                            frame::snapshot(&world, Some(banner)),
                        ));
                        let pause = Duration::from_secs_f32(world.config.level_pause_secs);
                        if !pause_for(&mut cmd_rx, pause).await {
                            break;
                        }
                        world.start_new_level(&mut rng);
                        pending = TickInput::default();

                        // Reset interval for clean timing
                        interval = tokio::time::interval(tick_interval);
                        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
                    },
                    GameStatus::GameOver => {
                        let _ = broadcast_tx.send(SessionBroadcast::Frame(
                            frame::snapshot(&world, Some("Game Over!".to_owned())),
                        ));
                        let pause = Duration::from_secs_f32(world.config.game_over_pause_secs);
                        pause_for(&mut cmd_rx, pause).await;
                        break;
                    },
                }
            }
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(SessionCommand::Input(input)) => pending.merge(input),
                    Some(SessionCommand::Quit) | None => break,
                }
            }
        }
    }

    let _ = broadcast_tx.send(SessionBroadcast::Ended);
}

/// Pause for `duration` while draining commands but not ticking.
/// Returns false if a quit arrived during the pause.
async fn pause_for(
    cmd_rx: &mut mpsc::UnboundedReceiver<SessionCommand>,
    duration: Duration,
) -> bool {
    let pause_end = tokio::time::Instant::now() + duration;
    loop {
        tokio::select! {
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(SessionCommand::Quit) | None => return false,
                    Some(SessionCommand::Input(_)) => {},
                }
            }
            _ = tokio::time::sleep_until(pause_end) => return true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollhero_game::frame::SpriteTag;

    fn test_config() -> GameConfig {
        GameConfig {
            level_pause_secs: 0.05,
            game_over_pause_secs: 0.05,
            ..GameConfig::default()
        }
    }

    #[tokio::test]
    async fn session_starts_and_broadcasts_frames() {
        let (cmd_tx, mut broadcast_rx, handle) = spawn_session(test_config(), 42);

        let msg = broadcast_rx.recv().await.expect("should receive broadcast");
        match msg {
            SessionBroadcast::Frame(frame) => {
                assert_eq!(frame.hud.level, 1, "session bootstraps into level 1");
                assert_eq!(frame.hud.health, 100);
                let players = frame
                    .sprites
                    .iter()
                    .filter(|s| s.tag == SpriteTag::Player)
                    .count();
                assert_eq!(players, 1);
                let enemies = frame
                    .sprites
                    .iter()
                    .filter(|s| s.tag == SpriteTag::Enemy)
                    .count();
                assert_eq!(enemies, 7, "level 1 wave should be on screen");
            },
            other => panic!("Expected Frame, got: {other:?}"),
        }

        let _ = cmd_tx.send(SessionCommand::Quit);
        let _ = handle.await;
    }

    #[tokio::test]
    async fn shoot_input_reaches_simulation() {
        let (cmd_tx, mut broadcast_rx, handle) = spawn_session(test_config(), 7);

        // Consume the first frame, then fire.
        let _ = broadcast_rx.recv().await;
        let _ = cmd_tx.send(SessionCommand::Input(TickInput {
            shoot: true,
            ..Default::default()
        }));

        // A projectile should appear within a few ticks.
        let mut saw_projectile = false;
        for _ in 0..10 {
            match tokio::time::timeout(Duration::from_millis(500), broadcast_rx.recv()).await {
                Ok(Some(SessionBroadcast::Frame(frame))) => {
                    if frame.sprites.iter().any(|s| s.tag == SpriteTag::Projectile) {
                        saw_projectile = true;
                        break;
                    }
                },
                _ => break,
            }
        }
        assert!(saw_projectile, "shoot input should spawn a projectile");

        let _ = cmd_tx.send(SessionCommand::Quit);
        let _ = handle.await;
    }

    #[tokio::test]
    async fn quit_command_ends_session_cleanly() {
        let (cmd_tx, mut broadcast_rx, handle) = spawn_session(test_config(), 3);

        let _ = broadcast_rx.recv().await;
        let _ = cmd_tx.send(SessionCommand::Quit);

        let mut got_ended = false;
        for _ in 0..10 {
            match tokio::time::timeout(Duration::from_millis(500), broadcast_rx.recv()).await {
                Ok(Some(SessionBroadcast::Ended)) => {
                    got_ended = true;
                    break;
                },
                Ok(Some(_)) => continue,
                _ => break,
            }
        }
        assert!(got_ended, "Quit command should produce Ended broadcast");
        let _ = handle.await;
    }

    #[tokio::test]
    async fn dropping_command_sender_ends_session() {
        let (cmd_tx, mut broadcast_rx, handle) = spawn_session(test_config(), 9);

        let _ = broadcast_rx.recv().await;
        drop(cmd_tx);

        let mut got_ended = false;
        for _ in 0..20 {
            match tokio::time::timeout(Duration::from_millis(500), broadcast_rx.recv()).await {
                Ok(Some(SessionBroadcast::Ended)) => {
                    got_ended = true;
                    break;
                },
                Ok(Some(_)) => continue,
                _ => break,
            }
        }
        assert!(got_ended, "closed command channel should end the session");
        let _ = handle.await;
    }
}
