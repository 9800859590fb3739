use anyhow::{Context, Result};
use console::{style, Emoji};
use dialoguer::{theme::ColorfulTheme, Select};
use tracing::{error, info};

use crate::{
    cli::args::{Args, Commands},
    models::{cart::SortMode, product::Catalog},
    services::CartService,
    utils::{
        config::Config,
        formatting::{
            format_cart_table, format_grand_total, format_product_choice, format_row_choice,
        },
    },
};

static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");
static INFO: Emoji<'_, '_> = Emoji("ℹ️ ", "");
static CART: Emoji<'_, '_> = Emoji("🛒 ", "");

pub struct CliApp {
    cart_service: CartService,
    sort_mode: SortMode,
    config: Config,
}

enum MenuAction {
    AddItem,
    RemoveItem,
    ChangeSorting,
    Checkout,
}

impl CliApp {
    pub fn new(args: &Args) -> Result<Self> {
        let config = Config::from_env().context("Failed to load configuration")?;

        let catalog = match &args.catalog {
            Some(path) => Catalog::from_json_file(path)
                .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
            None => Catalog::builtin(),
        };

        // The session opens with one line already in the cart
        let default_id = catalog
            .products()
            .next()
            .map(|product| product.id.clone())
            .context("Catalog is empty")?;
        let cart_service = CartService::with_initial_line(catalog, &default_id)
            .context("Failed to seed the initial cart line")?;
        info!("Cart seeded with default line: {}", default_id);

        Ok(Self {
            cart_service,
            sort_mode: args.sort,
            config,
        })
    }

    pub fn run(&mut self, command: Option<Commands>) -> Result<()> {
        match command.unwrap_or(Commands::Shop) {
            Commands::Shop => self.run_shop_session(),
            Commands::Catalog => self.print_catalog(),
        }
    }

    /// The interactive session: every mutation or sort change is followed
    /// by a full re-render of the cart view.
    fn run_shop_session(&mut self) -> Result<()> {
        println!("{} {}", CART, style("Shopping Cart").bold().cyan());

        loop {
            self.render_cart();

            match self.prompt_menu()? {
                MenuAction::AddItem => self.handle_add_item()?,
                MenuAction::RemoveItem => self.handle_remove_item()?,
                MenuAction::ChangeSorting => self.handle_change_sorting()?,
                MenuAction::Checkout => {
                    let snapshot = self.cart_service.snapshot(self.sort_mode);
                    println!(
                        "{} {}",
                        INFO,
                        format_grand_total(&snapshot, &self.config.currency_symbol)
                    );
                    info!("Session finished with total {}", snapshot.grand_total);
                    return Ok(());
                }
            }
        }
    }

    /// Display surface: one row per visible cart line plus the grand total.
    fn render_cart(&self) {
        let snapshot = self.cart_service.snapshot(self.sort_mode);

        println!();
        if snapshot.is_empty() {
            println!("{} {}", INFO, style("Your cart is empty").dim());
        } else {
            println!(
                "{}",
                format_cart_table(&snapshot, &self.config.currency_symbol)
            );
        }
        println!(
            "{}",
            format_grand_total(&snapshot, &self.config.currency_symbol)
        );
    }

    fn prompt_menu(&self) -> Result<MenuAction> {
        let choices = [
            "Add item".to_string(),
            "Remove item".to_string(),
            format!("Change sorting (current: {})", self.sort_mode.label()),
            "Checkout".to_string(),
        ];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("What would you like to do?")
            .items(&choices)
            .default(0)
            .interact()?;

        Ok(match selection {
            0 => MenuAction::AddItem,
            1 => MenuAction::RemoveItem,
            2 => MenuAction::ChangeSorting,
            _ => MenuAction::Checkout,
        })
    }

    /// Selection surface: pick a product from the catalog, then add it.
    fn handle_add_item(&mut self) -> Result<()> {
        let products: Vec<_> = self.cart_service.catalog().products().cloned().collect();
        let labels: Vec<String> = products
            .iter()
            .map(|product| format_product_choice(product, &self.config.currency_symbol))
            .collect();

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Pick a product")
            .items(&labels)
            .default(0)
            .interact()?;

        let product_id = &products[selection].id;
        if let Err(e) = self.cart_service.add_item(product_id) {
            println!("{} {}", CROSS, style(&e).red());
            error!("Failed to add item: {}", e);
        }

        Ok(())
    }

    /// Per-row remove control: pick one of the visible lines.
    fn handle_remove_item(&mut self) -> Result<()> {
        let snapshot = self.cart_service.snapshot(self.sort_mode);
        if snapshot.is_empty() {
            println!("{} {}", INFO, style("Nothing to remove").dim());
            return Ok(());
        }

        let labels: Vec<String> = snapshot
            .rows
            .iter()
            .map(|row| format_row_choice(row, &self.config.currency_symbol))
            .collect();

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Remove which item?")
            .items(&labels)
            .default(0)
            .interact()?;

        let product_id = &snapshot.rows[selection].product_id;
        if let Err(e) = self.cart_service.remove_item(product_id) {
            println!("{} {}", CROSS, style(&e).red());
            error!("Failed to remove item: {}", e);
        }

        Ok(())
    }

    /// Sort-mode surface: changing the mode re-renders without mutating
    /// the cart.
    fn handle_change_sorting(&mut self) -> Result<()> {
        let labels: Vec<&str> = SortMode::ALL.iter().map(|mode| mode.label()).collect();
        let current = SortMode::ALL
            .iter()
            .position(|mode| *mode == self.sort_mode)
            .unwrap_or(0);

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Sort cart by")
            .items(&labels)
            .default(current)
            .interact()?;

        self.sort_mode = SortMode::ALL[selection];
        info!("Sort mode changed to {}", self.sort_mode);
        Ok(())
    }

    fn print_catalog(&self) -> Result<()> {
        println!("{} {}", INFO, style("Product Catalog").bold().cyan());
        for product in self.cart_service.catalog().products() {
            println!(
                "  {}",
                format_product_choice(product, &self.config.currency_symbol)
            );
        }
        Ok(())
    }
}
