use crate::widgets::SelectList;

const MENU_FOOTER: &str = "Fullscreen recommended";
const TIME_SELECT_FOOTER: &str = "Correct answers add 1s to time, incorrect subtracts 1s.\n\
Try to keep the bomb from exploding!\n\
[←] to go back | [q] to quit";

/// Title, then one label/description pair per item; the cursor row is
/// marked with `>`.
#[must_use]
pub fn list_view(list: &SelectList) -> String {
    let rows: Vec<String> = list
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let marker = if index == list.cursor() { ">" } else { " " };
            format!("{marker} {}\n    {}", item.label(), item.description())
        })
        .collect();
    format!("  {}\n\n{}\n", list.title(), rows.join("\n\n"))
}

#[must_use]
pub fn menu(difficulties: &SelectList) -> String {
    format!("{}\n{MENU_FOOTER}", list_view(difficulties))
}

#[must_use]
pub fn time_select(lengths: &SelectList) -> String {
    format!("{}\n{TIME_SELECT_FOOTER}", list_view(lengths))
}
