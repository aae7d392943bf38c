//! Menu dataset used when no CSV file is configured

/// Columns: id, name, description, price, image, category
pub const MENU_CSV: &str = r#"id,name,description,price,image,category
1,Classic Burger,"House-made beef patty with lettuce, tomato, and special sauce",12.99,classic_burger.jpg,Burgers
2,Veggie Burger,"Plant-based patty with avocado, sprouts, and vegan aioli",13.99,veggie_burger.jpg,Burgers
3,Chicken Sandwich,"Grilled chicken breast with bacon, swiss cheese, and honey mustard",11.99,chicken_sandwich.jpg,Sandwiches
4,Fish Tacos,"Beer-battered cod, cabbage slaw, and lime crema in corn tortillas",14.99,fish_tacos.jpg,Specialties
5,Caesar Salad,"Romaine lettuce, parmesan cheese, croutons, and classic dressing",9.99,caesar_salad.jpg,Salads
6,French Fries,"Hand-cut potatoes, fried crispy and seasoned with sea salt",4.99,french_fries.jpg,Sides
7,Chocolate Milkshake,"House-made chocolate ice cream blended with milk and topped with whipped cream",6.99,chocolate_milkshake.jpg,Drinks
8,Margherita Pizza,"Fresh mozzarella, tomato sauce, and basil on thin crust",15.99,margherita_pizza.jpg,Pizza
9,Buffalo Wings,"Crispy wings tossed in spicy buffalo sauce with blue cheese dip",12.99,buffalo_wings.jpg,Appetizers
10,Cheesecake,"New York style with graham cracker crust and berry compote",7.99,cheesecake.jpg,Desserts
11,Iced Tea,"House-brewed black tea with lemon and optional simple syrup",2.99,iced_tea.jpg,Drinks
12,Steak Frites,"8oz ribeye with truffle fries and herb butter",24.99,steak_frites.jpg,Entrees
13,Mac & Cheese,"Three-cheese blend with toasted breadcrumb topping",10.99,mac_cheese.jpg,Sides
14,Onion Rings,"Beer-battered sweet onions with spicy ketchup",5.99,onion_rings.jpg,Sides
15,Mushroom Risotto,"Arborio rice with wild mushrooms, white wine, and parmesan",16.99,mushroom_risotto.jpg,Entrees"#;
