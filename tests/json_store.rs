use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use paneplan::db::{JsonProjectRepository, JsonStore, JsonTaskRepository, SharedStore};
use paneplan::repo::{ProjectRepository, TaskRepository};
use paneplan::tui::app::App;
use paneplan::tui::enums::{Detail, Focus, PaneState};

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_line(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
    press(app, KeyCode::Enter);
}

fn open(path: &std::path::Path) -> SharedStore {
    JsonStore::open(path).unwrap().into_shared()
}

fn project_titles(app: &App) -> Vec<String> {
    app.projects()
        .projects()
        .iter()
        .map(|p| p.title.clone())
        .collect()
}

#[test]
fn created_projects_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("paneplan.json");

    {
        let mut app = App::from_store(open(&path));
        assert_eq!(app.projects().state(), PaneState::Empty);
        for title in ["Home", "Work", "Garden"] {
            press(&mut app, KeyCode::Char('p'));
            press(&mut app, KeyCode::Char('n'));
            type_line(&mut app, title);
        }
        assert_eq!(
            app.status().message(),
            Some("Project Garden created. Press n to start adding new tasks.")
        );
    }

    let app = App::from_store(open(&path));
    assert_eq!(project_titles(&app), vec!["Home", "Work", "Garden"]);
    assert!(app.projects().active().is_none());
}

#[test]
fn removing_project_deletes_its_tasks_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("paneplan.json");

    {
        let store = open(&path);
        let mut projects = JsonProjectRepository::new(store.clone());
        let mut tasks = JsonTaskRepository::new(store);
        let home = projects.create("Home", "").unwrap();
        let work = projects.create("Work", "").unwrap();
        tasks.create(home.id, "Mow lawn").unwrap();
        for title in ["Report", "Email", "Review"] {
            tasks.create(work.id, title).unwrap();
        }
    }

    let mut app = App::from_store(open(&path));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.tasks().tasks().len(), 3);

    press(&mut app, KeyCode::Char('p'));
    press(&mut app, KeyCode::Char('D'));
    press(&mut app, KeyCode::Char('y'));

    assert_eq!(app.status().message(), Some("Removed Project: Work"));
    assert_eq!(project_titles(&app), vec!["Home"]);
    assert!(app.tasks().tasks().is_empty());
    assert_eq!(app.contents().third_col(), None);
    assert_eq!(app.focus(), Focus::Projects);

    let store = open(&path);
    let db = store.borrow();
    let remaining: Vec<&str> = db
        .database()
        .tasks
        .iter()
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(remaining, vec!["Mow lawn"]);
    assert_eq!(db.database().projects.len(), 1);
}

#[test]
fn task_lifecycle_through_keyboard() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("paneplan.json");
    let mut app = App::from_store(open(&path));

    press(&mut app, KeyCode::Char('n'));
    type_line(&mut app, "Home");
    assert_eq!(app.focus(), Focus::Tasks);

    press(&mut app, KeyCode::Char('n'));
    type_line(&mut app, "Mow lawn");
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.focus(), Focus::Tasks);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.contents().third_col(), Some(Detail::Task));
    press(&mut app, KeyCode::Char(' '));
    assert!(app.tasks().tasks()[0].completed);

    press(&mut app, KeyCode::Char('d'));
    assert!(app.tasks().tasks().is_empty());
    assert_eq!(app.status().message(), Some("Removed Task: Mow lawn"));

    let reopened = open(&path);
    assert!(reopened.borrow().database().tasks.is_empty());
    assert_eq!(reopened.borrow().database().projects.len(), 1);
}

#[test]
fn corrupt_database_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("paneplan.json");
    std::fs::write(&path, "[1, 2").unwrap();

    let err = JsonStore::open(&path).unwrap_err();
    assert!(err.to_string().starts_with("could not parse"));
}
