use super::*;

#[test]
fn block_builder_appends_in_order() {
    let c = SkeletonContent::new()
        .block(Rect::new(0.0, 0.0, 4.0, 4.0), 1.0, Argb::RED)
        .block(Rect::new(4.0, 0.0, 8.0, 4.0), 0.0, Argb::BLUE);
    assert_eq!(c.blocks.len(), 2);
    assert_eq!(c.blocks[1].color, Argb::BLUE);
}

#[test]
fn list_item_stays_inside_bounds() {
    let size = Size::new(200.0, 60.0);
    let c = SkeletonContent::list_item(size, Argb(0xFFDD_DDDD));
    assert_eq!(c.blocks.len(), 4);
    for b in &c.blocks {
        assert!(b.rect.x0 >= 0.0 && b.rect.x1 <= size.width);
        assert!(b.rect.y0 >= 0.0 && b.rect.y1 <= size.height);
    }
}

#[test]
fn painted_blocks_cover_their_interior_only() {
    let mut layer = Surface::new(16, 8).unwrap();
    SkeletonContent::new()
        .block(Rect::new(0.0, 0.0, 8.0, 8.0), 0.0, Argb::RED)
        .paint(&mut layer)
        .unwrap();
    assert_eq!(layer.pixel(3, 3), Some([255, 0, 0, 255]));
    assert_eq!(layer.pixel(12, 3).map(|p| p[3]), Some(0));
}
