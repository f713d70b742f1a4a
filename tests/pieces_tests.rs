//! Piece catalog and rotation behavior through the public API.

use neotris::core::{canonical, color};
use neotris::types::PieceKind;

#[test]
fn test_catalog_matches_expected_matrices() {
    let cells = |kind: PieceKind| canonical(kind).cells().collect::<Vec<_>>();

    assert_eq!(cells(PieceKind::I), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    assert_eq!(cells(PieceKind::O), vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    assert_eq!(cells(PieceKind::T), vec![(1, 0), (0, 1), (1, 1), (2, 1)]);
    assert_eq!(cells(PieceKind::S), vec![(1, 0), (2, 0), (0, 1), (1, 1)]);
    assert_eq!(cells(PieceKind::Z), vec![(0, 0), (1, 0), (1, 1), (2, 1)]);
    assert_eq!(cells(PieceKind::J), vec![(0, 0), (0, 1), (1, 1), (2, 1)]);
    assert_eq!(cells(PieceKind::L), vec![(2, 0), (0, 1), (1, 1), (2, 1)]);
}

#[test]
fn test_rotation_cycle_length_divides_four() {
    for kind in PieceKind::ALL {
        let original = canonical(kind);
        let once = original.rotated_cw();
        let twice = once.rotated_cw();
        let thrice = twice.rotated_cw();
        assert_eq!(thrice.rotated_cw(), original, "{:?}", kind);

        // Every rotation still has exactly four cells.
        for shape in [original, once, twice, thrice] {
            assert_eq!(shape.cells().count(), 4, "{:?}", kind);
        }
    }
}

#[test]
fn test_s_and_z_are_mirrored() {
    let s: Vec<_> = canonical(PieceKind::S).cells().collect();
    let mirrored: Vec<_> = canonical(PieceKind::Z)
        .cells()
        .map(|(dx, dy)| (2 - dx, dy))
        .collect();
    let mut sorted = mirrored.clone();
    sorted.sort();
    let mut s_sorted = s.clone();
    s_sorted.sort();
    assert_eq!(s_sorted, sorted);
}

#[test]
fn test_colors_are_distinct() {
    for (i, a) in PieceKind::ALL.iter().enumerate() {
        for b in PieceKind::ALL.iter().skip(i + 1) {
            assert_ne!(color(*a), color(*b), "{:?} vs {:?}", a, b);
        }
    }
}
