use anyhow::Result;
use common::{
    AspectRatio, Axis, BoardPattern, Color, DrawCall, Game, RecordingMount, RenderError,
    SurfaceConfig,
};

fn fill_colors(calls: &[DrawCall]) -> Vec<&str> {
    calls
        .iter()
        .filter_map(|call| match call {
            DrawCall::SetFillColor(color) => Some(color.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_game_draws_whole_board_at_origin() -> Result<()> {
    let mut mount = RecordingMount::new();
    let mut game = Game::new(&mut mount, AspectRatio::new(3, 2)?, 4, 2)?;

    assert_eq!(game.grid().width(), 6);
    assert_eq!(game.grid().height(), 4);

    game.draw(0, 0)?;
    let target = game.surface().target();
    assert_eq!(target.fill_count(), 24);
    assert!(fill_colors(target.calls()).iter().all(|c| *c == "rgb(255 255 255)"));
    Ok(())
}

#[test]
fn test_game_draw_past_edge_uses_grey() -> Result<()> {
    let mut mount = RecordingMount::new();
    let mut game = Game::new(&mut mount, AspectRatio::new(3, 2)?, 4, 2)?;

    game.draw(-1, -1)?;
    let colors = fill_colors(game.surface().target().calls());
    assert_eq!(colors[0], "rgb(100 100 100)");
    // left column (4) plus top row (6) share one corner
    assert_eq!(colors.iter().filter(|c| **c == "rgb(100 100 100)").count(), 9);
    Ok(())
}

#[test]
fn test_game_from_config_uses_pattern() -> Result<()> {
    let config = SurfaceConfig {
        pattern: BoardPattern::Checkerboard {
            even: Color::BLACK,
            odd: Color::WHITE,
        },
        ..SurfaceConfig::new(3.0, 2.0, 2.0, 1.0)
    };
    let mut mount = RecordingMount::new();
    let mut game = Game::from_config(&mut mount, &config)?;
    game.draw(0, 0)?;

    let colors = fill_colors(game.surface().target().calls());
    assert_eq!(
        colors,
        vec![
            "rgb(0 0 0)",
            "rgb(255 255 255)",
            "rgb(255 255 255)",
            "rgb(0 0 0)",
            "rgb(0 0 0)",
            "rgb(255 255 255)",
        ]
    );
    Ok(())
}

#[test]
fn test_board_smaller_than_surface_is_a_dimension_mismatch() -> Result<()> {
    let config = SurfaceConfig {
        board_width: Some(3.0),
        board_height: Some(2.0),
        ..SurfaceConfig::new(3.0, 2.0, 4.0, 2.0)
    };
    let mut mount = RecordingMount::new();
    let mut game = Game::from_config(&mut mount, &config)?;

    let err = game.draw(0, 0).unwrap_err();
    assert_eq!(
        err,
        RenderError::DimensionMismatch {
            axis: Axis::Width,
            actual: 3,
            expected: 6
        }
    );
    assert_eq!(game.surface().target().fill_count(), 0);
    Ok(())
}

#[test]
fn test_game_reflects_board_edits() -> Result<()> {
    let mut mount = RecordingMount::new();
    let mut game = Game::new(&mut mount, AspectRatio::new(3, 2)?, 2, 1)?;
    game.grid_mut().set_color(2, 1, Color::rgb(9, 8, 7))?;
    game.draw(0, 0)?;

    let colors = fill_colors(game.surface().target().calls());
    assert_eq!(colors.last(), Some(&"rgb(9 8 7)"));
    Ok(())
}

#[test]
fn test_game_resize_rebuilds_board_sized_from_surface() -> Result<()> {
    let mut mount = RecordingMount::new();
    let mut game = Game::new(&mut mount, AspectRatio::new(3, 2)?, 480, 9)?;
    game.resize(AspectRatio::new(3, 2)?, 320, None)?;

    assert_eq!(game.surface().cell_ratio(), 10);
    assert_eq!(game.grid().width(), 480);
    assert_eq!(game.grid().height(), 320);
    game.draw(0, 0)?;
    Ok(())
}

#[test]
fn test_game_draws_after_shrinking() -> Result<()> {
    let mut mount = RecordingMount::new();
    let mut game = Game::new(&mut mount, AspectRatio::new(3, 2)?, 4, 1)?;
    game.resize(AspectRatio::new(3, 2)?, 2, None)?;

    game.draw(0, 0)?;
    assert_eq!(game.surface().target().fill_count(), 6);
    Ok(())
}

#[test]
fn test_game_resize_keeps_explicit_board() -> Result<()> {
    let config = SurfaceConfig {
        board_width: Some(3.0),
        board_height: Some(2.0),
        ..SurfaceConfig::new(3.0, 2.0, 4.0, 2.0)
    };
    let mut mount = RecordingMount::new();
    let mut game = Game::from_config(&mut mount, &config)?;
    game.resize(AspectRatio::new(3, 2)?, 2, Some(1.0))?;

    assert_eq!(game.grid().width(), 3);
    assert_eq!(game.grid().height(), 2);
    game.draw(0, 0)?;
    Ok(())
}

#[test]
fn test_failed_game_resize_keeps_board() -> Result<()> {
    let mut mount = RecordingMount::new();
    let mut game = Game::new(&mut mount, AspectRatio::new(3, 2)?, 4, 1)?;
    assert!(game.resize(AspectRatio::new(3, 2)?, 2, Some(7.0)).is_err());

    assert_eq!(game.grid().width(), 6);
    game.draw(0, 0)?;
    Ok(())
}

#[test]
fn test_invalid_config_builds_nothing() -> Result<()> {
    let mut mount = RecordingMount::new();
    let config = SurfaceConfig::new(3.0, 2.0, 480.0, 7.0);
    assert!(Game::from_config(&mut mount, &config).is_err());
    assert_eq!(mount.mounted(), 0);
    Ok(())
}
