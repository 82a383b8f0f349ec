use speculate2::speculate;

speculate! {
    use notes_core::{CreateNoteInput, NoteError, NoteService, NoteStore, UpdateNoteInput};
    use std::future::Future;
    use std::time::Duration;
    use tempfile::TempDir;

    fn block_on<F: Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to build runtime")
            .block_on(future)
    }

    fn block_on_threaded<F: Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(8)
            .enable_all()
            .build()
            .expect("Failed to build runtime")
            .block_on(future)
    }

    fn setup() -> (TempDir, NoteService) {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let service = NoteService::new(NoteStore::new(dir.path().join("notes.json")));
        (dir, service)
    }

    fn input(title: &str, body: &str) -> CreateNoteInput {
        CreateNoteInput {
            note_title: Some(title.to_string()),
            note_body: Some(body.to_string()),
        }
    }

    describe "note lifecycle" {
        describe "list" {
            it "returns an empty collection for a fresh store" {
                let (_dir, notes) = setup();
                assert!(block_on(notes.list()).is_empty());
            }

            it "returns notes in creation order" {
                let (_dir, notes) = setup();
                block_on(async {
                    let a = notes.create(input("first", "1")).await.unwrap();
                    let b = notes.create(input("second", "2")).await.unwrap();
                    let c = notes.create(input("third", "3")).await.unwrap();

                    let ids: Vec<String> = notes.list().await.into_iter().map(|n| n.id).collect();
                    assert_eq!(ids, vec![a.id, b.id, c.id]);
                });
            }
        }

        describe "create" {
            it "stores the note with matching timestamps" {
                let (_dir, notes) = setup();
                block_on(async {
                    let created = notes.create(input("Task List", "Write docs")).await.unwrap();
                    let fetched = notes.get(&created.id).await.unwrap();

                    assert_eq!(fetched.note_title, "Task List");
                    assert_eq!(fetched.note_body, "Write docs");
                    assert_eq!(fetched.created_at, fetched.updated_at);
                    assert_eq!(fetched, created);
                });
            }

            it "assigns distinct ids to rapid successive creates" {
                let (_dir, notes) = setup();
                block_on(async {
                    let mut ids = Vec::new();
                    for i in 0..20 {
                        ids.push(notes.create(input(&format!("n{}", i), "b")).await.unwrap().id);
                    }
                    let mut unique = ids.clone();
                    unique.sort();
                    unique.dedup();
                    assert_eq!(unique.len(), ids.len());
                });
            }

            it "rejects an empty title and leaves the collection unchanged" {
                let (_dir, notes) = setup();
                block_on(async {
                    notes.create(input("keep", "me")).await.unwrap();

                    let result = notes.create(input("", "body")).await;

                    assert!(matches!(result, Err(NoteError::InvalidInput(_))));
                    assert_eq!(notes.list().await.len(), 1);
                });
            }

            it "rejects an empty body" {
                let (_dir, notes) = setup();
                let result = block_on(notes.create(input("title", "")));
                assert!(matches!(result, Err(NoteError::InvalidInput(_))));
                assert!(block_on(notes.list()).is_empty());
            }

            it "rejects missing fields" {
                let (_dir, notes) = setup();
                let result = block_on(notes.create(CreateNoteInput {
                    note_title: Some("only title".into()),
                    note_body: None,
                }));
                assert!(matches!(result, Err(NoteError::InvalidInput(_))));
            }

            it "reports a storage error when the store cannot be written" {
                let dir = TempDir::new().unwrap();
                let notes = NoteService::new(NoteStore::new(dir.path()));

                let result = block_on(notes.create(input("a", "b")));

                assert!(matches!(result, Err(NoteError::Storage(_))));
            }
        }

        describe "get" {
            it "returns not found for an unknown id" {
                let (_dir, notes) = setup();
                let result = block_on(notes.get("nonexistent"));
                assert!(matches!(result, Err(NoteError::NotFound(id)) if id == "nonexistent"));
            }

            it "matches ids exactly" {
                let (_dir, notes) = setup();
                block_on(async {
                    let note = notes.create(input("a", "b")).await.unwrap();
                    let prefix = &note.id[..8];
                    let upper = note.id.to_uppercase();

                    assert!(matches!(notes.get(prefix).await, Err(NoteError::NotFound(_))));
                    assert!(matches!(notes.get(&upper).await, Err(NoteError::NotFound(_))));
                });
            }
        }

        describe "update" {
            it "changes only the supplied field and advances updated_at" {
                let (_dir, notes) = setup();
                block_on(async {
                    let note = notes.create(input("old title", "body")).await.unwrap();
                    tokio::time::sleep(Duration::from_millis(5)).await;

                    let updated = notes
                        .update(&note.id, UpdateNoteInput {
                            note_title: Some("new title".into()),
                            note_body: None,
                        })
                        .await
                        .unwrap();

                    assert_eq!(updated.id, note.id);
                    assert_eq!(updated.note_title, "new title");
                    assert_eq!(updated.note_body, "body");
                    assert_eq!(updated.created_at, note.created_at);
                    assert!(updated.updated_at > note.updated_at);
                    assert_eq!(notes.get(&note.id).await.unwrap(), updated);
                });
            }

            it "accepts an explicitly empty field" {
                let (_dir, notes) = setup();
                block_on(async {
                    let note = notes.create(input("title", "body")).await.unwrap();
                    let updated = notes
                        .update(&note.id, UpdateNoteInput {
                            note_title: None,
                            note_body: Some(String::new()),
                        })
                        .await
                        .unwrap();
                    assert_eq!(updated.note_body, "");
                });
            }

            it "rejects an update with neither field" {
                let (_dir, notes) = setup();
                block_on(async {
                    let note = notes.create(input("title", "body")).await.unwrap();
                    let result = notes.update(&note.id, UpdateNoteInput::default()).await;

                    assert!(matches!(result, Err(NoteError::InvalidInput(_))));
                    assert_eq!(notes.get(&note.id).await.unwrap(), note);
                });
            }

            it "checks the id before the fields" {
                let (_dir, notes) = setup();
                let result = block_on(notes.update("missing", UpdateNoteInput::default()));
                assert!(matches!(result, Err(NoteError::NotFound(_))));
            }
        }

        describe "delete" {
            it "removes the note so get reports not found" {
                let (_dir, notes) = setup();
                block_on(async {
                    let note = notes.create(input("a", "b")).await.unwrap();
                    notes.delete(&note.id).await.unwrap();

                    assert!(matches!(notes.get(&note.id).await, Err(NoteError::NotFound(_))));
                    assert!(matches!(notes.delete(&note.id).await, Err(NoteError::NotFound(_))));
                });
            }

            it "preserves the order of the remaining notes" {
                let (_dir, notes) = setup();
                block_on(async {
                    let a = notes.create(input("a", "1")).await.unwrap();
                    let b = notes.create(input("b", "2")).await.unwrap();
                    let c = notes.create(input("c", "3")).await.unwrap();

                    notes.delete(&b.id).await.unwrap();

                    let ids: Vec<String> = notes.list().await.into_iter().map(|n| n.id).collect();
                    assert_eq!(ids, vec![a.id, c.id]);
                });
            }
        }

        describe "full scenario" {
            it "goes from empty to one note and back to empty" {
                let (_dir, notes) = setup();
                block_on(async {
                    assert!(notes.list().await.is_empty());

                    let note = notes.create(input("A", "B")).await.unwrap();
                    let listed = notes.list().await;
                    assert_eq!(listed.len(), 1);
                    assert_eq!(listed[0].note_title, "A");

                    notes.delete(&note.id).await.unwrap();
                    assert!(notes.list().await.is_empty());
                });
            }

            it "keeps every create when reads race them on a fresh store" {
                block_on_threaded(async {
                    for _ in 0..100 {
                        let (_dir, notes) = setup();

                        let readers: Vec<_> = (0..6)
                            .map(|_| {
                                let notes = notes.clone();
                                tokio::spawn(async move { notes.list().await })
                            })
                            .collect();
                        let writer = {
                            let notes = notes.clone();
                            tokio::spawn(async move { notes.create(input("raced", "body")).await })
                        };

                        for reader in readers {
                            reader.await.unwrap();
                        }
                        let created = writer.await.unwrap().expect("create should succeed");

                        assert_eq!(notes.get(&created.id).await.unwrap(), created);
                    }
                });
            }

            it "does not lose updates from concurrent clones" {
                let (_dir, notes) = setup();
                block_on_threaded(async {
                    let handles: Vec<_> = (0..10)
                        .map(|i| {
                            let notes = notes.clone();
                            tokio::spawn(async move {
                                notes.list().await;
                                notes.create(input(&format!("note {}", i), "body")).await
                            })
                        })
                        .collect();

                    for handle in handles {
                        handle.await.unwrap().unwrap();
                    }

                    assert_eq!(notes.list().await.len(), 10);
                });
            }

            it "applies concurrent updates and deletes to the same collection" {
                let (_dir, notes) = setup();
                block_on_threaded(async {
                    let mut created = Vec::new();
                    for i in 0..10 {
                        created.push(notes.create(input(&format!("note {}", i), "body")).await.unwrap());
                    }

                    let handles: Vec<_> = created
                        .iter()
                        .enumerate()
                        .map(|(i, note)| {
                            let notes = notes.clone();
                            let id = note.id.clone();
                            tokio::spawn(async move {
                                notes.list().await;
                                if i % 2 == 0 {
                                    notes
                                        .update(&id, UpdateNoteInput {
                                            note_title: Some(format!("updated {}", i)),
                                            note_body: None,
                                        })
                                        .await
                                        .map(|_| ())
                                } else {
                                    notes.delete(&id).await
                                }
                            })
                        })
                        .collect();

                    for handle in handles {
                        handle.await.unwrap().unwrap();
                    }

                    let remaining = notes.list().await;
                    let expected: Vec<String> = created.iter().step_by(2).map(|n| n.id.clone()).collect();
                    let ids: Vec<String> = remaining.iter().map(|n| n.id.clone()).collect();
                    assert_eq!(ids, expected);
                    assert!(remaining.iter().all(|n| n.note_title.starts_with("updated ")));
                });
            }
        }
    }
}
