use habit_builder::db::Database;
use habit_builder::models::*;
use habit_builder::store::*;
use speculate2::speculate;

speculate! {
    before {
        let db = Database::open_memory().expect("Failed to create in-memory database");
        db.migrate().expect("Failed to run migrations");
    }

    describe "key-value entries" {
        it "returns None for a missing key" {
            let value = db.get_value("nothing").expect("Query failed");
            assert!(value.is_none());
        }

        it "stores and replaces a value" {
            db.set_value("k", "first").expect("Write failed");
            db.set_value("k", "second").expect("Write failed");

            assert_eq!(db.get_value("k").expect("Query failed"), Some("second".to_string()));
        }

        it "records when a key was written" {
            assert!(db.updated_at("k").expect("Query failed").is_none());

            let before = chrono::Utc::now() - chrono::Duration::seconds(1);
            db.set_value("k", "v").expect("Write failed");

            let written = db.updated_at("k").expect("Query failed").expect("Missing timestamp");
            assert!(written >= before);
        }

        it "deletes a value" {
            db.set_value("k", "v").expect("Write failed");

            assert!(db.delete_value("k").expect("Delete failed"));
            assert!(!db.delete_value("k").expect("Delete failed"));
            assert!(db.get_value("k").expect("Query failed").is_none());
        }
    }

    describe "goal store on sqlite" {
        it "starts empty on a fresh database" {
            let store = GoalStore::open(db.clone()).expect("Failed to open store");
            assert!(store.is_empty());
        }

        it "saves under the goals key" {
            let mut store = GoalStore::open(db.clone()).expect("Failed to open store");
            store.create("Read", 5).expect("Create failed");

            let raw = db.get_value(GOALS_KEY).expect("Query failed").expect("Nothing saved");
            let saved: serde_json::Value = serde_json::from_str(&raw).expect("Invalid JSON");
            assert_eq!(saved[0]["name"], "Read");
            assert_eq!(saved[0]["progress"], 0);
            assert_eq!(saved[0]["max"], 5);
            assert!(saved[0]["id"].is_string());
        }

        it "reloads what it saved" {
            let mut store = GoalStore::open(db.clone()).expect("Failed to open store");
            let goal = store.create("Read", 5).expect("Create failed").expect("Goal not created");
            store.increment(goal.id()).expect("Increment failed");
            store.create("Run", 0).expect("Create failed");

            let reopened = GoalStore::open(db.clone()).expect("Failed to reopen");
            assert_eq!(reopened.goals(), store.goals());
            assert_eq!(reopened.goals()[0].progress(), 1);
            assert_eq!(reopened.goals()[1].max(), 10);
        }
    }

    describe "file-backed database" {
        it "keeps goals across connections" {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let path = dir.path().join("nested").join("habits.db");

            {
                let db = Database::open(&path).expect("Failed to open database");
                db.migrate().expect("Failed to migrate");
                let mut store = GoalStore::open(db).expect("Failed to open store");
                store.create("Journal", 3).expect("Create failed");
            }

            let db = Database::open(&path).expect("Failed to reopen database");
            db.migrate().expect("Migrations should be idempotent");
            let store = GoalStore::open(db).expect("Failed to open store");

            assert_eq!(store.len(), 1);
            assert_eq!(store.goals()[0].name(), "Journal");
            assert_eq!(store.goals()[0].max(), 3);
        }
    }
}
