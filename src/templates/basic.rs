//! Plain JavaScript REST API, no database.

use indexmap::IndexMap;

use super::{ContentSource, Template};

pub(super) fn template() -> Template {
    Template {
        name: "Basic REST API",
        folders: &[
            "src",
            "src/controllers",
            "src/routes",
            "src/middleware",
            "src/utils",
            "src/config",
        ],
        files: IndexMap::from([
            ("src/server.js", ContentSource::Literal(SERVER)),
            ("src/routes/index.js", ContentSource::Literal(ROUTES)),
            (
                "src/controllers/userController.js",
                ContentSource::Literal(USER_CONTROLLER),
            ),
            ("src/config/index.js", ContentSource::Literal(CONFIG)),
            (".env", ContentSource::Literal(ENV)),
            (".gitignore", ContentSource::Literal(GITIGNORE)),
            ("package.json", ContentSource::Generated(package_json)),
            ("README.md", ContentSource::Generated(readme)),
        ]),
    }
}

const SERVER: &str = r#"const express = require('express');
const cors = require('cors');
require('dotenv').config();
const routes = require('./routes');

const app = express();
const PORT = process.env.PORT || 3000;

// Middleware
app.use(cors());
app.use(express.json());
app.use(express.urlencoded({ extended: true }));

// Routes
app.use('/api', routes);
app.get('/api/health', (req, res) => {
    res.json({ status: 'OK', timestamp: new Date().toISOString() });
});

// Error handling
app.use((err, req, res, next) => {
    console.error(err.stack);
    res.status(500).json({ message: 'Something went wrong!' });
});

app.listen(PORT, () => {
    console.log(`Server running on port ${PORT}`);
});"#;

const ROUTES: &str = r#"const express = require('express');
const userController = require('../controllers/userController');

const router = express.Router();

// Example routes
router.get('/users', userController.getUsers);
router.get('/users/:id', userController.getUserById);
router.post('/users', userController.createUser);

module.exports = router;"#;

const USER_CONTROLLER: &str = r#"// Example controller with CRUD operations
const users = [
    { id: 1, name: 'John Doe', email: 'john@example.com' },
    { id: 2, name: 'Jane Smith', email: 'jane@example.com' }
];

exports.getUsers = (req, res) => {
    res.json(users);
};

exports.getUserById = (req, res) => {
    const user = users.find(u => u.id === parseInt(req.params.id));
    if (!user) return res.status(404).json({ message: 'User not found' });
    res.json(user);
};

exports.createUser = (req, res) => {
    const { name, email } = req.body;
    if (!name || !email) {
        return res.status(400).json({ message: 'Name and email are required' });
    }

    const newUser = {
        id: users.length + 1,
        name,
        email
    };

    users.push(newUser);
    res.status(201).json(newUser);
};"#;

const CONFIG: &str = r#"require('dotenv').config();

module.exports = {
    PORT: process.env.PORT || 3000,
    NODE_ENV: process.env.NODE_ENV || 'development'
};"#;

const ENV: &str = "NODE_ENV=development
PORT=3000";

const GITIGNORE: &str = "node_modules/
.env.local
.env.production
.DS_Store
*.log";

fn package_json(project_name: &str) -> String {
    format!(
        r#"{{
    "name": "{project_name}",
    "version": "1.0.0",
    "description": "Node.js backend application",
    "main": "src/server.js",
    "scripts": {{
        "start": "node src/server.js",
        "dev": "nodemon src/server.js"
    }},
    "dependencies": {{
        "express": "^4.18.2",
        "cors": "^2.8.5",
        "dotenv": "^16.3.1"
    }},
    "devDependencies": {{
        "nodemon": "^3.0.1"
    }}
}}"#
    )
}

fn readme(project_name: &str) -> String {
    format!(
        r#"# {project_name}

## Installation
```bash
npm install
```

## Development
```bash
npm run dev
```

## Production
```bash
npm start
```
"#
    )
}
