//! Renders the same movie data under different frames, width policies, and
//! overflow settings, then flattens a directory tree into rows.

use std::collections::HashMap;

use textgrid::prelude::*;

fn main() -> Result<(), Error> {
    simple()?;
    complex()?;
    trees()?;
    Ok(())
}

/// Built-in layouts and the layout modifiers, all on the same table.
fn simple() -> Result<(), Error> {
    println!("Everything in default settings");
    let mut table = Table::new();
    table.append_columns([
        Column::standard("ID"),
        Column::standard("Movie"),
        Column::standard("Score"),
    ])?;
    let movies: [(i32, &str, f64); 5] = [
        (1, "The Godfather", 9.2),
        (20, "霸王别姬", 8.1),
        (30, "東京物語", 8.2),
        (40, "La Haine", 7.8),
        (500, "Life of Pi", 7.9),
    ];
    for (id, movie, score) in movies {
        table.append_row([id.into(), movie.into(), score.into()])?;
    }
    println!("{}", table.render(OutputKind::Console)?);

    println!("Unicode light frame");
    table.layout = TableLayout::light();
    println!("{}", table.render(OutputKind::Console)?);

    println!("Hide the header");
    table.layout = TableLayout::light().hide_header();
    println!("{}", table.render(OutputKind::Console)?);

    println!("Hide the outer border");
    table.layout = TableLayout::light().hide_outer_border();
    println!("{}", table.render(OutputKind::Console)?);

    println!("Hide the header and the outer border");
    table.layout = TableLayout::light().hide_outer_border().hide_header();
    println!("{}", table.render(OutputKind::Console)?);

    println!("Split header and body");
    table.layout = TableLayout::light().split_header_and_body();
    println!("{}", table.render(OutputKind::Console)?);

    println!("Enforce table width to 80");
    table.layout = TableLayout::light().width(80);
    println!("{}", table.render(OutputKind::Console)?);
    Ok(())
}

/// Width enforcement combined with per-column policies.
fn complex() -> Result<(), Error> {
    println!("Enforce table width to 80 while pinning the Movie column");
    let mut table = Table::with_layout(TableLayout::light().width(80));
    table.append_columns([
        Column::standard("ID"),
        Column::standard("Movie").width(0, false),
        Column::standard("Introduction"),
        Column::standard("Actors"),
    ])?;
    append_movie_rows(&mut table)?;
    println!("{}", table.render(OutputKind::Console)?);

    println!("Truncate the introduction instead of wrapping it");
    let mut table = Table::with_layout(TableLayout::light().width(80));
    table.append_columns([
        Column::standard("ID"),
        Column::standard("Movie"),
        Column::standard("Introduction")
            .body_style(ColumnStyle::body_default().overflow(Overflow::Truncate)),
        Column::standard("Actors"),
    ])?;
    append_movie_rows(&mut table)?;
    println!("{}", table.render(OutputKind::Console)?);

    println!("Show line feeds literally instead of breaking lines");
    let mut table = Table::with_layout(TableLayout::light().width(80));
    table.append_columns([
        Column::standard("ID"),
        Column::standard("Movie"),
        Column::standard("Introduction")
            .body_style(ColumnStyle::body_default().overflow(Overflow::Truncate)),
        Column::standard("Actors").body_style(
            ColumnStyle::body_default()
                .overflow(Overflow::Truncate)
                .escape_line_feed(true),
        ),
    ])?;
    append_movie_rows(&mut table)?;
    println!("{}", table.render(OutputKind::Console)?);
    Ok(())
}

fn append_movie_rows(table: &mut Table) -> Result<(), Error> {
    table.append_row([
        1.into(),
        "The Godfather".into(),
        "Francis Ford Coppola's masterpiece that chronicles the Corleone mafia family, \
         is widely regarded as one of the greatest films in world cinema."
            .into(),
        "Marlon Brando\nAl Pacino\nJames Caan".into(),
    ])?;
    table.append_row([
        20.into(),
        "霸王别姬".into(),
        "A poignant drama that tells the story of two performers in the Beijing Opera \
         during the tumultuous events of the 20th century in China."
            .into(),
        "张国荣\r\n张丰毅\n巩俐\r\n葛优".into(),
    ])?;
    table.append_row([
        30.into(),
        "La Haine".into(),
        "A 1995 film by Mathieu Kassovitz that depicts the tensions in the suburbs of \
         Paris, following the lives of three friends over a day."
            .into(),
        "Vincent Cassel\nHubert Koundé\nSaïd Taghmaoui".into(),
    ])?;
    Ok(())
}

struct Entry {
    name: &'static str,
    size: &'static str,
    children: Vec<Entry>,
}

impl Entry {
    fn dir(name: &'static str, children: Vec<Entry>) -> Self {
        Self {
            name,
            size: "-",
            children,
        }
    }

    fn file(name: &'static str, size: &'static str) -> Self {
        Self {
            name,
            size,
            children: Vec::new(),
        }
    }
}

impl TreeNode for Entry {
    fn fields(&self) -> HashMap<String, CellValue> {
        HashMap::from([
            ("Name".to_string(), CellValue::from(self.name)),
            ("Size".to_string(), CellValue::from(self.size)),
        ])
    }

    fn children(&self) -> Vec<&dyn TreeNode> {
        self.children.iter().map(|c| c as &dyn TreeNode).collect()
    }
}

/// Forests flattened into rows with a generated connector column.
fn trees() -> Result<(), Error> {
    let root = Entry::dir(
        "src",
        vec![
            Entry::dir("bin", vec![Entry::file("demo.rs", "6.1K")]),
            Entry::file("lib.rs", "2.3K"),
            Entry::file("table.rs", "19K"),
        ],
    );
    let nodes: Vec<&dyn TreeNode> = vec![&root];

    println!("Flatten a directory tree into rows");
    let mut table = Table::with_layout(TableLayout::light());
    table.append_columns([Column::standard("Name"), Column::standard("Size")])?;
    table.append_trees(TreePathStyle::light(), &nodes)?;
    println!("{}", table.render(OutputKind::Console)?);

    println!("The same forest with ASCII connectors");
    let mut table = Table::new();
    table.append_columns([Column::standard("Name"), Column::standard("Size")])?;
    table.append_trees(TreePathStyle::ascii(), &nodes)?;
    println!("{}", table.render(OutputKind::Console)?);
    Ok(())
}
