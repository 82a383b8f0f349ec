//! Built-in API documentation written to `README.md` on first start.

/// README contents describing the API served on `port`.
pub fn readme_template(port: u16) -> String {
    let base = format!("http://localhost:{port}");
    format!(
        r##"# Notes API

A simple RESTful API for managing notes.

## Features

- Create, read, update, and delete notes
- Persistent storage using a JSON file
- RESTful API design
- Error handling
- API documentation

## API Endpoints

| Method | Endpoint     | Description         |
|--------|--------------|---------------------|
| GET    | /            | API documentation   |
| GET    | /notes       | Get all notes       |
| GET    | /notes/:id   | Get a note by ID    |
| POST   | /notes       | Create a new note   |
| PATCH  | /notes/:id   | Update a note by ID |
| DELETE | /notes/:id   | Delete a note by ID |

## API Usage Examples

### Get all notes

```bash
curl -X GET {base}/notes
```

### Get a note by ID

```bash
curl -X GET {base}/notes/YOUR_NOTE_ID
```

### Create a new note

```bash
curl -X POST {base}/notes \
  -H "Content-Type: application/json" \
  -d '{{"note_title": "Task List", "note_body": "Complete project documentation"}}'
```

### Update a note

```bash
curl -X PATCH {base}/notes/YOUR_NOTE_ID \
  -H "Content-Type: application/json" \
  -d '{{"note_body": "Updated content"}}'
```

### Delete a note

```bash
curl -X DELETE {base}/notes/YOUR_NOTE_ID
```
"##
    )
}
