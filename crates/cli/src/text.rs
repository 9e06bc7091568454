use hexlife::Grid;

const ALIVE: char = '#';
const DEAD: char = '.';

/// Render the current generation as plain text, one line per row. Odd rows
/// are indented by one column so the cells line up the way they do on a
/// pointy layout.
pub fn draw_grid(grid: &Grid) -> String {
    let mut output = String::with_capacity(grid.len() * 2);
    let mut current_row = None;

    for cell in grid.cells() {
        let r = cell.position().r();
        if current_row != Some(r) {
            if current_row.is_some() {
                output.push('\n');
            }
            if r.rem_euclid(2) == 1 {
                output.push(' ');
            }
            current_row = Some(r);
        } else {
            output.push(' ');
        }
        output.push(if cell.alive { ALIVE } else { DEAD });
    }
    output.push('\n');

    output.push_str(&format!(
        "generation {}, {} alive\n",
        grid.generation(),
        grid.alive_count()
    ));
    output
}
