use blockworld::{
    AABB, BlockType, ChunkEvent, ChunkPos, Game, GameSettings, InputState, Ray, World,
    split_block_pos,
};
use glam::{IVec3, Vec3};

#[test]
fn terrain_is_the_same_for_the_same_seed() {
    let a = World::with_seed(2024);
    let b = World::with_seed(2024);
    for x in (-200..200).step_by(7) {
        for z in (-200..200).step_by(11) {
            let h = a.height_at(x, z);
            assert_eq!(h, b.height_at(x, z));
            assert!((1..=19).contains(&h), "height {} at ({}, {})", h, x, z);
        }
    }
}

#[test]
fn generated_columns_match_the_height_field() {
    let mut world = World::with_seed(5);
    world.update_chunks(Vec3::new(-8.0, 20.0, -8.0));

    for x in -24..8 {
        for z in -24..8 {
            let h = world.height_at(x, z);
            let surface = world.get_block(IVec3::new(x, h, z));
            let expected = if h < 8 { BlockType::Sand } else { BlockType::Grass };
            assert_eq!(surface, Some(expected), "column ({}, {})", x, z);
            assert_eq!(world.get_block(IVec3::new(x, h - 1, z)), Some(BlockType::Dirt));
            if h < 8 {
                assert_eq!(world.get_block(IVec3::new(x, 8, z)), Some(BlockType::Water));
                assert_eq!(world.get_block(IVec3::new(x, 9, z)), None);
            }
        }
    }
}

#[test]
fn walking_east_streams_the_window_along() {
    let mut world = World::with_seed(1);
    world.update_chunks(Vec3::new(0.5, 30.0, 0.5));
    assert_eq!(world.chunk_count(), 81);

    let first: Vec<ChunkPos> = world.loaded_chunks();
    assert_eq!(first.first(), Some(&ChunkPos::new(-4, -4)));
    assert_eq!(first.last(), Some(&ChunkPos::new(4, 4)));

    world.update_chunks(Vec3::new(5.0 * 16.0 + 0.5, 30.0, 0.5));
    let second = world.loaded_chunks();
    assert_eq!(second.len(), 81);
    assert!(second.iter().all(|p| (1..=9).contains(&p.x) && (-4..=4).contains(&p.z)));

    let mut loaded = 0;
    let mut unloaded = 0;
    for event in world.drain_events() {
        match event {
            ChunkEvent::Loaded(_) => loaded += 1,
            ChunkEvent::Unloaded(pos) => {
                assert!(pos.x < 1);
                unloaded += 1;
            }
            ChunkEvent::Remeshed(_) => panic!("streaming does not remesh"),
        }
    }
    assert_eq!(loaded, 81 + 45);
    assert_eq!(unloaded, 45);
}

#[test]
fn edits_in_negative_chunks_land_in_the_right_place() {
    let mut world = World::with_seed(8);
    world.update_chunks(Vec3::new(-20.0, 30.0, -20.0));

    let pos = IVec3::new(-17, 50, -1);
    assert!(world.set_block(pos, Some(BlockType::Planks)));
    let (chunk, local) = split_block_pos(pos);
    assert_eq!(chunk, ChunkPos::new(-2, -1));
    assert_eq!(
        world.chunk(chunk).unwrap().get(local),
        Some(BlockType::Planks)
    );

    let ray = Ray::new(Vec3::new(-16.5, 53.0, -0.5), Vec3::NEG_Y);
    assert_eq!(world.remove_block(&ray), Some(BlockType::Planks));
    assert_eq!(world.get_block(pos), None);
}

#[test]
fn sand_placed_on_stone_is_meshed_on_top() {
    let mut world = World::with_seed(8);
    world.update_chunks(Vec3::ZERO);
    world.set_block(IVec3::new(5, 40, 5), Some(BlockType::Stone));
    world.drain_events();

    let ray = Ray::new(Vec3::new(5.5, 44.0, 5.5), Vec3::NEG_Y);
    let placed = world.place_block(&ray, BlockType::Sand, Vec3::new(0.5, 60.0, 0.5));
    assert_eq!(placed, Ok(IVec3::new(5, 41, 5)));
    assert_eq!(world.drain_events(), vec![ChunkEvent::Remeshed(ChunkPos::new(0, 0))]);

    let batch = world
        .chunk(ChunkPos::new(0, 0))
        .and_then(|c| c.mesh())
        .and_then(|m| m.batch(BlockType::Sand))
        .unwrap();
    let top = batch
        .vertices
        .iter()
        .map(|v| v.position[1])
        .fold(f32::NEG_INFINITY, f32::max);
    assert_eq!(top, 42.0);
}

#[test]
fn boxes_collide_with_stone_but_not_water() {
    let mut world = World::with_seed(8);
    world.update_chunks(Vec3::ZERO);
    world.set_block(IVec3::new(2, 45, 2), Some(BlockType::Stone));
    world.set_block(IVec3::new(6, 45, 6), Some(BlockType::Water));

    let inside_stone = AABB::from_feet(Vec3::new(2.5, 45.1, 2.5), 0.3, 0.5);
    let inside_water = AABB::from_feet(Vec3::new(6.5, 45.1, 6.5), 0.3, 0.5);
    assert!(world.intersects_solid(&inside_stone));
    assert!(!world.intersects_solid(&inside_water));
}

#[test]
fn a_scripted_session_keeps_the_world_consistent() {
    let mut settings = GameSettings::default();
    settings.world.seed = 77;
    settings.world.render_distance = 2;
    let mut game = Game::new(&settings);

    let input = InputState {
        forward: true,
        jump: true,
        ..Default::default()
    };
    for _ in 0..300 {
        game.update(1.0 / 60.0, &input);
    }

    let world = game.world();
    let center = ChunkPos::containing(game.player().position());
    assert_eq!(world.chunk_count(), 25);
    assert!(world.is_loaded(center));
    assert!(world.chunks().all(|c| c.mesh().is_some() && !c.is_mesh_dirty()));
    assert!(game.player().position().x > 0.0);
}
