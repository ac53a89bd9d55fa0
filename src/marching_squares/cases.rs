use super::types::CellConfiguration;

/// Triangle fans for the 16 corner configurations, in runs of three vertex ids.
///
/// Ids 1-4 are the cell corners, 5-8 the edge midpoints (see `vertex::VERTEX_OFFSETS`).
pub const TRIANGULATION: [&[u8]; 16] = [
    /* 00:0000 */ &[],
    /* 01:0001 */ &[1, 6, 5],
    /* 02:0010 */ &[6, 2, 7],
    /* 03:0011 */ &[1, 2, 5, 2, 7, 5],
    /* 04:0100 */ &[7, 3, 8],
    /* 05:0101 */ &[1, 6, 7, 1, 7, 3, 1, 3, 5, 5, 3, 8],
    /* 06:0110 */ &[6, 2, 8, 2, 3, 8],
    /* 07:0111 */ &[1, 2, 5, 5, 2, 3, 5, 3, 8],
    /* 08:1000 */ &[5, 8, 4],
    /* 09:1001 */ &[1, 6, 8, 1, 8, 4],
    /* 10:1010 */ &[5, 6, 2, 5, 2, 4, 4, 2, 7, 4, 7, 8],
    /* 11:1011 */ &[1, 8, 4, 1, 2, 8, 2, 7, 8],
    /* 12:1100 */ &[5, 7, 3, 5, 3, 4],
    /* 13:1101 */ &[1, 6, 7, 1, 7, 4, 4, 7, 3],
    /* 14:1110 */ &[5, 6, 2, 5, 2, 3, 5, 3, 4],
    /* 15:1111 */ &[1, 2, 3, 1, 3, 4],
];

/// Vertex-id triples for one configuration.
pub fn triangles_for(config: CellConfiguration) -> impl Iterator<Item = [u8; 3]> {
    TRIANGULATION[config.index()]
        .chunks_exact(3)
        .map(|run| [run[0], run[1], run[2]])
}
