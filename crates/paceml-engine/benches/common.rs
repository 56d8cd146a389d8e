// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_workout(blocks: usize) -> String {
    let mut content = String::from(
        "@title{Generated}\n@date{2024-01-01}\n@athlete{Bench}\n\
         @define_zone[Z1]{6:45}{7:15}{Recovery}\n@define_zone[Z4]{4:40}{5:00}{Threshold}\n",
    );

    for block in 0..blocks {
        content.push_str(&format!("# block {block}\n"));
        content.push_str(&format!("@interval[Easy {block}]{{10:00}}{{Z1}}\n"));
        content.push_str(&format!("@reps[Set {block}]{{{}}}\n", block % 8 + 1));
        content.push_str("  @interval{1km}{Z4}{rest=90s,effort=hard}\n");
        content.push_str("  @interval{2:00}{Z1}\n");
        content.push_str("Keep the recoveries honest.\n");
    }

    content.push_str("@total_distance\n@total_time\n");
    content
}
