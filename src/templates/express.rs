//! JavaScript Express API backed by MongoDB through Mongoose.

use indexmap::IndexMap;

use super::{ContentSource, Template};

pub(super) fn template() -> Template {
    Template {
        name: "Express + MongoDB",
        folders: &[
            "src",
            "src/controllers",
            "src/models",
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
            ("src/models/User.js", ContentSource::Literal(USER_MODEL)),
            ("src/config/database.js", ContentSource::Generated(database)),
            (".env", ContentSource::Generated(env)),
            (".gitignore", ContentSource::Literal(GITIGNORE)),
            ("package.json", ContentSource::Generated(package_json)),
            ("README.md", ContentSource::Generated(readme)),
        ]),
    }
}

const SERVER: &str = r#"const express = require('express');
const cors = require('cors');
require('dotenv').config();
const connectDB = require('./config/database');
const routes = require('./routes');

const app = express();
const PORT = process.env.PORT || 3000;

// Database connection
connectDB();

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

const USER_CONTROLLER: &str = r#"const User = require('../models/User');

exports.getUsers = async (req, res) => {
    try {
        const users = await User.find();
        res.json(users);
    } catch (err) {
        res.status(500).json({ message: err.message });
    }
};

exports.getUserById = async (req, res) => {
    try {
        const user = await User.findById(req.params.id);
        if (!user) return res.status(404).json({ message: 'User not found' });
        res.json(user);
    } catch (err) {
        res.status(500).json({ message: err.message });
    }
};

exports.createUser = async (req, res) => {
    const user = new User({
        name: req.body.name,
        email: req.body.email,
    });

    try {
        const newUser = await user.save();
        res.status(201).json(newUser);
    } catch (err) {
        res.status(400).json({ message: err.message });
    }
};"#;

const USER_MODEL: &str = r#"const mongoose = require('mongoose');

const userSchema = new mongoose.Schema({
    name: {
        type: String,
        required: true
    },
    email: {
        type: String,
        required: true,
        unique: true
    },
    createdAt: {
        type: Date,
        default: Date.now
    }
});

module.exports = mongoose.model('User', userSchema);"#;

const GITIGNORE: &str = "node_modules/
.env.local
.env.production
.DS_Store
*.log";

fn database(project_name: &str) -> String {
    format!(
        r#"const mongoose = require('mongoose');

const connectDB = async () => {{
    try {{
        await mongoose.connect(process.env.MONGODB_URI || `mongodb://localhost:27017/{project_name}`);
        console.log('MongoDB connected successfully');
    }} catch (error) {{
        console.error('Database connection error:', error);
        process.exit(1);
    }}
}};

module.exports = connectDB;"#
    )
}

fn env(project_name: &str) -> String {
    format!(
        "NODE_ENV=development
PORT=3000
MONGODB_URI=mongodb://localhost:27017/{project_name}"
    )
}

fn package_json(project_name: &str) -> String {
    format!(
        r#"{{
    "name": "{project_name}",
    "version": "1.0.0",
    "description": "Node.js backend with MongoDB",
    "main": "src/server.js",
    "scripts": {{
        "start": "node src/server.js",
        "dev": "nodemon src/server.js"
    }},
    "dependencies": {{
        "express": "^4.18.2",
        "mongoose": "^7.5.0",
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

## Setup
1. Make sure MongoDB is running locally or update MONGODB_URI in .env
2. Update environment variables in .env file

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
