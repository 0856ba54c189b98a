//! Basic example of building a puzzle without a word-list file.

use wordsearch_core::Grid;

fn main() {
    let mut grid = Grid::with_seed(10, 42).expect("grid size is valid");

    for word in ["puzzle", "search", "letter", "grid"] {
        if !grid.add_word(word) {
            eprintln!("could not place {:?}", word);
        }
    }

    println!("Key:\n");
    println!("{}", grid);

    grid.fill();

    println!("Puzzle:\n");
    println!("{}", grid);
}
