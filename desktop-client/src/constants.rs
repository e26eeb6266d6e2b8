pub const TOP_SCORE_COUNT: usize = 10;
