//! Fixed file contents written into every new project.

/// Ignore patterns for a Python data project.
pub const GITIGNORE: &str = "\
# Byte-compiled / optimized / DLL files
__pycache__/
*.py[cod]
*$py.class

#data
data/

# Virtual environment
venv/

# macOS system files
.DS_Store

# VSCode settings
.vscode/

# Jupyter Notebook checkpoints
.ipynb_checkpoints/

# Environment variables
.env
";

/// Dependency manifest, grouped by purpose. Several entries are commented
/// out on purpose; they are uncommented per-project as needed.
pub const REQUIREMENTS: &str = "\
# Core data analysis and scientific computing
numpy
pandas
scipy

# Financial analysis
# yfinance
# quantstats

# Data visualization
matplotlib
seaborn
# plotly

# Machine learning
# scikit-learn
#
# Jupyter notebooks
# jupyter

# Testing
pytest
pytest-cov

# Code quality
black
flake8
";

/// One-liner for the Windows family.
pub const ACTIVATE_BAT: &str = "venv\\Scripts\\activate.bat\n";

/// POSIX activation helper.
pub const ACTIVATE_SH: &str = "#!/bin/bash\nsource venv/bin/activate\n";
